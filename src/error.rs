/// Invalid arguments or configuration.
pub const EXIT_CONFIG: u8 = 2;
/// The embedded dataset could not be read.
pub const EXIT_DATA: u8 = 3;
/// Degenerate numeric input (non-positive values, zero variance, ...).
pub const EXIT_FIT: u8 = 4;
/// Terminal or chart rendering failed.
pub const EXIT_RENDER: u8 = 5;

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(EXIT_CONFIG, message)
    }

    pub fn fit(message: impl Into<String>) -> Self {
        Self::new(EXIT_FIT, message)
    }

    pub fn render(message: impl Into<String>) -> Self {
        Self::new(EXIT_RENDER, message)
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Prefix the message with where the failure happened, keeping the exit code.
    pub fn context(self, what: impl std::fmt::Display) -> Self {
        Self {
            exit_code: self.exit_code,
            message: format!("{what}: {}", self.message),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
