use crate::api::guests::guest_dto::GuestDto;

use hm_db::GuestPage;

use serde::Serialize;

/// One page of the guest listing, with the totals the frontend paginator
/// expects
#[derive(Debug, Serialize)]
pub struct GuestPageDto {
    pub guests: Vec<GuestDto>,
    pub total: i64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: i64,
}

impl From<GuestPage> for GuestPageDto {
    fn from(p: GuestPage) -> Self {
        Self {
            guests: p.guests.into_iter().map(GuestDto::from).collect(),
            total: p.total,
            page: p.page,
            limit: p.limit,
            total_pages: p.total_pages,
        }
    }
}
