//! config/site.rs Deployment-specific link targets.
//!
//! Update `SITE` for your deployment, then the page will use it. The values
//! are baked in at compile time; the page never fetches configuration.

/// The three outbound links a deployment can point somewhere.
pub struct SiteConfig {
    /// Hosted interactive demo. Required; applied to every demo anchor.
    pub demo_url: &'static str,
    /// Optional supplementary report document. Use "" to hide the report
    /// entry entirely.
    pub report_url: &'static str,
    /// Source repository. Use "" to hide the repository entry entirely.
    pub github_url: &'static str,
}

/// The live deployment. "Absent" is exactly the empty string; whitespace
/// counts as configured (matches the truthiness contract of the old page
/// config).
pub const SITE: SiteConfig = SiteConfig {
    demo_url: "https://misinformation-classification.streamlit.app/",
    // e.g. "https://your-site.example/report.pdf", or "" while unpublished
    report_url: "",
    github_url: "https://github.com/jhyunbinyi/Misinformation-Classification",
};
