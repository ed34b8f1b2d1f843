//! Iceland (rsk.is) has no page worth scraping; the check only hands back
//! the register link for a human to open.

use crate::core::{ICELAND_BASE, IcelandCheck};

/// Manual lookup link on the default register host. No network access.
pub fn check_iceland_manual_url(company_number: &str) -> IcelandCheck {
    manual_url_at(ICELAND_BASE, company_number)
}

/// Manual lookup link under `base`.
pub fn manual_url_at(base: &str, company_number: &str) -> IcelandCheck {
    IcelandCheck {
        country: "IS".into(),
        company_number: company_number.to_string(),
        manual_url: format!("{}/{company_number}", base.trim_end_matches('/')),
    }
}
