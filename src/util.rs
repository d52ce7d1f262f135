use fractic_server_error::ServerError;

use crate::{
    domain::usecases::generate_usecase::{GenerateUsecase as _, GenerateUsecaseImpl},
    entities::{Case, GenerationReport, GeneratorConfig, SheetLayout},
    presentation::{json_printer::JsonPrinter, workbook_layout::WorkbookLayoutBuilder},
};

pub struct TestCaseGenerator {
    config: GeneratorConfig,
    generate_usecase: GenerateUsecaseImpl,
    json_printer: JsonPrinter,
    layout_builder: WorkbookLayoutBuilder,
}

impl TestCaseGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            generate_usecase: GenerateUsecaseImpl::new(),
            json_printer: JsonPrinter::new(),
            layout_builder: WorkbookLayoutBuilder::new(),
        }
    }

    /// Claim request document of a single case, as written to `<id>.json`.
    pub fn render_json(&self, case: &Case) -> Result<String, ServerError> {
        self.json_printer.print(case, self.config.request_date)
    }

    /// Sheets of a single case's workbook, before they are written.
    pub fn workbook_layout(&self, case: &Case) -> Result<Vec<SheetLayout>, ServerError> {
        self.layout_builder.build(case)
    }

    /// Writes the fixtures of the whole standard catalog.
    pub fn generate(&self) -> Result<GenerationReport, ServerError> {
        self.generate_usecase.generate(&self.config)
    }
}

impl Default for TestCaseGenerator {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}
