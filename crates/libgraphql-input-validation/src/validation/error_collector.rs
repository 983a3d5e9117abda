use crate::validation::ValidationError;

/// Sink for the [`ValidationError`]s produced during a validation pass.
pub trait ErrorCollector {
    fn report_error(&mut self, error: ValidationError);
}
impl ErrorCollector for Vec<ValidationError> {
    fn report_error(&mut self, error: ValidationError) {
        self.push(error);
    }
}
