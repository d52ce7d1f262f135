use crate::entities::CaseGroup;

pub trait CatalogRepository {
    /// Case groups in processing order.
    fn groups(&self) -> Vec<CaseGroup>;
}
