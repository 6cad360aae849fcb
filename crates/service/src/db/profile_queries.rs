use sea_orm::{ConnectionTrait, EntityTrait, PaginatorTrait, QueryOrder, QuerySelect};
use models::{company, profile};

use crate::errors::ServiceError;
use crate::ordering::ProfileOrdering;
use crate::pagination::{Page, PageRequest};
use crate::profile::domain::{ProfileDetail, ProfileSummary};

use super::labels::names_by_profile;

fn detail_from(p: profile::Model, c: Option<company::Model>, labels: Vec<String>) -> ProfileDetail {
    ProfileDetail {
        id: p.id,
        img_url: p.img_url,
        name: p.name,
        email: p.email,
        tel: p.tel,
        rank: p.rank,
        company_id: p.company_id,
        company_name: c.map(|c| c.name),
        labels,
        memo: p.memo,
        address: p.address,
        birthday: p.birthday,
        web_site: p.web_site,
    }
}

/// One page of profiles with company name and labels.
///
/// With an ordering the primary key breaks ties so pages never overlap.
/// Without one no order is imposed.
pub async fn list_profiles<C: ConnectionTrait>(
    db: &C,
    ordering: Option<ProfileOrdering>,
    req: PageRequest,
) -> Result<Page<ProfileSummary>, ServiceError> {
    let count = profile::Entity::find().count(db).await?;
    // past the end: nothing to fetch, and the offset may not fit the binder
    if req.offset() >= count {
        return Ok(Page { count, page: req.page, page_size: req.page_size, results: Vec::new() });
    }

    let mut query = profile::Entity::find().find_also_related(company::Entity);
    if let Some(o) = ordering {
        query = query
            .order_by(o.column(), o.order())
            .order_by_asc(profile::Column::Id);
    }
    let rows = query
        .offset(req.offset())
        .limit(req.page_size)
        .all(db)
        .await?;

    let ids: Vec<i32> = rows.iter().map(|(p, _)| p.id).collect();
    let mut labels = names_by_profile(db, &ids).await?;
    let results = rows
        .into_iter()
        .map(|(p, c)| {
            let names = labels.remove(&p.id).unwrap_or_default();
            detail_from(p, c, names).summary()
        })
        .collect();

    Ok(Page { count, page: req.page, page_size: req.page_size, results })
}

pub async fn get_profile_detail<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<ProfileDetail>, ServiceError> {
    let Some((p, c)) = profile::Entity::find_by_id(id)
        .find_also_related(company::Entity)
        .one(db)
        .await?
    else {
        return Ok(None);
    };
    let mut labels = names_by_profile(db, &[p.id]).await?;
    let names = labels.remove(&p.id).unwrap_or_default();
    Ok(Some(detail_from(p, c, names)))
}
