use fractic_server_error::ServerError;
use taxcredit_fixtures::util::TestCaseGenerator;

fn main() -> Result<(), ServerError> {
    tracing_subscriber::fmt::init();
    TestCaseGenerator::default().generate()?;
    Ok(())
}
