//! Printing of generated HTML documents through a popup window.
//!
//! The browser specifics live behind [`PrintTarget`] so the open / write /
//! print / close sequence can be exercised without a DOM.

use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

pub const POPUP_BLOCKED_MESSAGE: &str = "Please allow pop-ups to print the report.";

/// Window that receives a standalone HTML document
pub trait PrintWindow {
    fn write_document(&self, html: &str) -> Result<(), String>;
    fn print_and_close(&self) -> Result<(), String>;
}

/// Something that can open print windows and show blocking alerts
pub trait PrintTarget {
    type Window: PrintWindow;

    /// `None` when the popup was blocked
    fn open_window(&self) -> Option<Self::Window>;
    fn alert(&self, message: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintOutcome {
    Printed,
    PopupBlocked,
}

/// Opens a window, writes `html` into it, prints and closes it.
/// A blocked popup shows an alert and writes nothing.
pub fn print_document<T: PrintTarget>(target: &T, html: &str) -> Result<PrintOutcome, String> {
    let Some(window) = target.open_window() else {
        log::warn!("Print window blocked by the browser");
        target.alert(POPUP_BLOCKED_MESSAGE);
        return Ok(PrintOutcome::PopupBlocked);
    };

    window.write_document(html)?;
    window.print_and_close()?;
    Ok(PrintOutcome::Printed)
}

/// Print target backed by the current browser window
pub struct BrowserPrintTarget {
    window: web_sys::Window,
}

impl BrowserPrintTarget {
    pub fn current() -> Result<Self, String> {
        let window = web_sys::window().ok_or("No window object")?;
        Ok(Self { window })
    }
}

impl PrintTarget for BrowserPrintTarget {
    type Window = BrowserPrintWindow;

    fn open_window(&self) -> Option<BrowserPrintWindow> {
        match self.window.open_with_url_and_target("", "blank") {
            Ok(Some(window)) => Some(BrowserPrintWindow(window)),
            Ok(None) => None,
            Err(e) => {
                log::warn!("window.open failed: {:?}", e);
                None
            }
        }
    }

    fn alert(&self, message: &str) {
        if let Err(e) = self.window.alert_with_message(message) {
            log::error!("Failed to show alert: {:?}", e);
        }
    }
}

pub struct BrowserPrintWindow(web_sys::Window);

impl PrintWindow for BrowserPrintWindow {
    fn write_document(&self, html: &str) -> Result<(), String> {
        // The popup's document belongs to another realm, so `instanceof`
        // based casts would fail here.
        let document: HtmlDocument = self
            .0
            .document()
            .ok_or("Print window has no document")?
            .unchecked_into();
        document
            .write_1(html)
            .map_err(|e| format!("Failed to write print document: {:?}", e))?;
        document
            .close()
            .map_err(|e| format!("Failed to close print document: {:?}", e))?;
        Ok(())
    }

    fn print_and_close(&self) -> Result<(), String> {
        self.0
            .print()
            .map_err(|e| format!("Failed to print: {:?}", e))?;
        self.0
            .close()
            .map_err(|e| format!("Failed to close print window: {:?}", e))?;
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::testing::FakePrintTarget;
    use super::*;

    #[test]
    fn test_print_sequence() {
        let target = FakePrintTarget::default();
        let outcome = print_document(&target, "<html></html>").unwrap();

        assert_eq!(outcome, PrintOutcome::Printed);
        assert_eq!(
            *target.log.borrow(),
            vec!["open", "write:<html></html>", "print", "close"]
        );
    }

    #[test]
    fn test_blocked_popup_alerts_and_writes_nothing() {
        let target = FakePrintTarget {
            popup_blocked: true,
            ..Default::default()
        };
        let outcome = print_document(&target, "<html></html>").unwrap();

        assert_eq!(outcome, PrintOutcome::PopupBlocked);
        assert_eq!(
            *target.log.borrow(),
            vec![format!("alert:{}", POPUP_BLOCKED_MESSAGE)]
        );
    }
}
