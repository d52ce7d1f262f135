use fractic_server_error::ServerError;
use tracing::info;

use crate::{
    data::{
        datasources::fixture_files_datasource::{
            FixtureFilesDatasource, FixtureFilesDatasourceImpl,
        },
        repositories::catalog_repository_impl::CatalogRepositoryImpl,
    },
    domain::{
        logic::catalog_validator::CatalogValidator,
        repositories::catalog_repository::CatalogRepository,
    },
    entities::{GenerationReport, GeneratorConfig, WrittenFixture},
    presentation::{
        json_printer::JsonPrinter, workbook_layout::WorkbookLayoutBuilder, xlsx_writer::XlsxWriter,
    },
};

pub trait GenerateUsecase {
    /// Validates the catalog, then writes one JSON document and one workbook
    /// per case into its group's directory.
    fn generate(&self, config: &GeneratorConfig) -> Result<GenerationReport, ServerError>;
}

pub(crate) struct GenerateUsecaseImpl<
    R1 = CatalogRepositoryImpl,      // Default.
    F1 = FixtureFilesDatasourceImpl, // Default.
> where
    R1: CatalogRepository,
    F1: FixtureFilesDatasource,
{
    catalog_repository: R1,
    fixture_files: F1,
    json_printer: JsonPrinter,
    layout_builder: WorkbookLayoutBuilder,
    xlsx_writer: XlsxWriter,
}

impl<R1, F1> GenerateUsecase for GenerateUsecaseImpl<R1, F1>
where
    R1: CatalogRepository,
    F1: FixtureFilesDatasource,
{
    fn generate(&self, config: &GeneratorConfig) -> Result<GenerationReport, ServerError> {
        let groups = self.catalog_repository.groups();
        CatalogValidator::new(&groups).validate()?;

        let mut report = GenerationReport::default();
        for group in &groups {
            let dir = config.group_dir(group.kind);
            self.fixture_files.ensure_dir(&dir)?;
            for case in group.cases {
                let json_path = dir.join(format!("{}.json", case.id));
                let xlsx_path = dir.join(format!("{}.xlsx", case.id));

                let json = self.json_printer.print(case, config.request_date)?;
                self.fixture_files.write(&json_path, json.as_bytes())?;
                let sheets = self.layout_builder.build(case)?;
                let workbook = self.xlsx_writer.write(&sheets, &xlsx_path)?;
                self.fixture_files.write(&xlsx_path, &workbook)?;

                info!(
                    case_id = case.id,
                    json = %json_path.display(),
                    xlsx = %xlsx_path.display(),
                    "[{}] {} written",
                    group.kind.tag(),
                    case.title
                );
                report.fixtures.push(WrittenFixture {
                    case_id: case.id,
                    group: group.kind,
                    json_path,
                    xlsx_path,
                });
            }
        }

        let total = report.total();
        info!(total, "총 {total}건 테스트 케이스 생성 완료!");
        Ok(report)
    }
}

impl GenerateUsecaseImpl {
    pub(crate) fn new() -> Self {
        GenerateUsecaseImpl {
            catalog_repository: CatalogRepositoryImpl::new(),
            fixture_files: FixtureFilesDatasourceImpl::new(),
            json_printer: JsonPrinter::new(),
            layout_builder: WorkbookLayoutBuilder::new(),
            xlsx_writer: XlsxWriter::new(),
        }
    }
}
