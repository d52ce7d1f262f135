use crate::{
    data::datasources::case_datasource::{
        CaseDatasource, CorporateCasesDatasourceImpl, IndividualCasesDatasourceImpl,
    },
    domain::repositories::catalog_repository::CatalogRepository,
    entities::CaseGroup,
};

pub(crate) struct CatalogRepositoryImpl<
    DS1 = CorporateCasesDatasourceImpl,  // Default.
    DS2 = IndividualCasesDatasourceImpl, // Default.
> where
    DS1: CaseDatasource,
    DS2: CaseDatasource,
{
    corporate_datasource: DS1,
    individual_datasource: DS2,
}

impl<DS1, DS2> CatalogRepository for CatalogRepositoryImpl<DS1, DS2>
where
    DS1: CaseDatasource,
    DS2: CaseDatasource,
{
    fn groups(&self) -> Vec<CaseGroup> {
        vec![
            self.corporate_datasource.group(),
            self.individual_datasource.group(),
        ]
    }
}

impl CatalogRepositoryImpl {
    pub(crate) fn new() -> Self {
        CatalogRepositoryImpl {
            corporate_datasource: CorporateCasesDatasourceImpl::new(),
            individual_datasource: IndividualCasesDatasourceImpl::new(),
        }
    }
}
