use std::{borrow::Cow, fmt, panic::Location};

/// Error message that remembers where in the code it was raised.
///
/// Build one with [`DiagnosticMessage::new`] or the [`diag!`] macro. The
/// macro accepts `format!` arguments, e.g. `diag!("no column in {}", table)`.
#[derive(Clone, Debug)]
pub struct DiagnosticMessage {
    message: Cow<'static, str>,
    location: &'static Location<'static>,
}

impl DiagnosticMessage {
    #[track_caller]
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
            location: Location::caller(),
        }
    }

    pub fn message(&self) -> &str {
        self.message.as_ref()
    }

    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }
}

impl fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // call-site is only interesting when debugging
        if f.alternate() {
            write!(
                f,
                "{} (at {}:{})",
                self.message,
                self.location.file(),
                self.location.line()
            )
        } else {
            f.write_str(&self.message)
        }
    }
}

#[macro_export]
macro_rules! diag {
    ($msg:literal $(,)?) => {
        $crate::error::diagnostics::DiagnosticMessage::new($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::diagnostics::DiagnosticMessage::new(format!($fmt, $($arg)*))
    };
}
