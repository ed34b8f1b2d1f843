/// Turns a fetched register page into the facts a checker records.
///
/// Each scraping country has one implementation; swapping it changes how a
/// page is read without touching fetching or logging.
pub trait PageSignal {
    type Output;

    /// Read the signal from a page body. Never fails; pages without the
    /// expected markup give the negative result.
    fn extract(&self, html: &str) -> Self::Output;
}
