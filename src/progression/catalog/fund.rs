//! Built-in fund launch catalog.
//!
//! The `initial-tasks` category gates everything else. Each fund track adds
//! one category made of its track-specific setup tasks followed by the fund
//! skills for that asset class.

use super::{Catalog, CatalogError, CategoryTemplate, TaskTemplate, TrackTemplate};
use crate::progression::domain::{
    CategoryKey, FieldKind, FormField, FormSchema, ParseFundTrackError, TrackKey,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Key of the gating onboarding category.
pub const ONBOARDING_CATEGORY: &str = "initial-tasks";

/// First id of the onboarding category.
const ONBOARDING_BASE_ID: u32 = 1;

/// Mutually exclusive fund types a user can launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FundTrack {
    /// Single-family rental fund.
    Sfr,
    /// Commercial office and retail fund.
    Commercial,
    /// Specialty and niche asset fund.
    Specialty,
}

impl FundTrack {
    /// All fund tracks in display order.
    pub const ALL: [Self; 3] = [Self::Sfr, Self::Commercial, Self::Specialty];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sfr => "sfr",
            Self::Commercial => "commercial",
            Self::Specialty => "specialty",
        }
    }

    /// Returns the human-readable fund title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Sfr => "Single-Family Rental Fund",
            Self::Commercial => "Commercial Office / Retail Fund",
            Self::Specialty => "Specialty / Niche Asset Fund",
        }
    }

    /// Returns the first id of this track's category.
    #[must_use]
    pub const fn base_id(self) -> u32 {
        match self {
            Self::Sfr => 101,
            Self::Commercial => 201,
            Self::Specialty => 301,
        }
    }

    /// Returns the track key.
    ///
    /// # Errors
    ///
    /// Never fails for the built-in names; the result mirrors
    /// [`TrackKey::new`].
    pub fn key(self) -> Result<TrackKey, CatalogError> {
        Ok(TrackKey::new(self.as_str())?)
    }

    /// Returns the key of the category generated for this track.
    ///
    /// # Errors
    ///
    /// Never fails for the built-in names; the result mirrors
    /// [`CategoryKey::new`].
    pub fn category_key(self) -> Result<CategoryKey, CatalogError> {
        Ok(CategoryKey::new(self.as_str())?)
    }
}

impl TryFrom<&str> for FundTrack {
    type Error = ParseFundTrackError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|track| track.as_str() == normalized)
            .ok_or_else(|| ParseFundTrackError(value.to_owned()))
    }
}

impl fmt::Display for FundTrack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builds the fund launch catalog.
///
/// # Errors
///
/// Returns [`CatalogError`] if the built-in templates violate catalog
/// validation, which the crate's tests rule out.
pub fn fund_launch_catalog() -> Result<Catalog, CatalogError> {
    let gate = CategoryTemplate::new(
        CategoryKey::new(ONBOARDING_CATEGORY)?,
        ONBOARDING_BASE_ID,
        onboarding_tasks(),
    );

    let tracks = FundTrack::ALL
        .into_iter()
        .map(|track| -> Result<TrackTemplate, CatalogError> {
            let category =
                CategoryTemplate::new(track.category_key()?, track.base_id(), track_tasks(track));
            Ok(TrackTemplate::new(track.key()?, vec![category]))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Catalog::new(Some(gate), Vec::new(), tracks)
}

fn track_tasks(track: FundTrack) -> Vec<TaskTemplate> {
    let (mut tasks, skills) = match track {
        FundTrack::Sfr => (sfr_setup_tasks(), sfr_skills()),
        FundTrack::Commercial => (commercial_setup_tasks(), commercial_skills()),
        FundTrack::Specialty => (specialty_setup_tasks(), specialty_skills()),
    };
    tasks.extend(skills);
    tasks
}

fn text(name: &str, label: &str) -> FormField {
    FormField::new(name, label, FieldKind::Text)
}

fn number(name: &str, label: &str) -> FormField {
    FormField::new(name, label, FieldKind::Number)
}

fn textarea(name: &str, label: &str) -> FormField {
    FormField::new(name, label, FieldKind::Textarea)
}

fn email(name: &str, label: &str) -> FormField {
    FormField::new(name, label, FieldKind::Email)
}

fn select(name: &str, label: &str, options: &[&str]) -> FormField {
    FormField::select(name, label, options.iter().copied())
}

fn form(title: &str, fields: Vec<FormField>, submit: &str) -> FormSchema {
    FormSchema::new(title, fields, submit)
}

fn onboarding_tasks() -> Vec<TaskTemplate> {
    vec![
        TaskTemplate::new(
            "Choose Your Fund Type",
            "Select between SFR, Commercial, or Specialty fund types",
        )
        .navigation("/fund-selection")
        .hint("Navigate to fund selection to choose your fund type"),
        TaskTemplate::new(
            "Understanding Fund Categories",
            "Explore the three main fund categories and their requirements",
        )
        .dialog(form(
            "Fund Categories Overview",
            vec![
                select(
                    "primaryFocus",
                    "Which fund type interests you most?",
                    &[
                        "SFR (Single Family Rental)",
                        "Commercial Office/Retail",
                        "Specialty/Niche Assets",
                    ],
                ),
                select(
                    "experience",
                    "Your real estate experience level",
                    &["Beginner", "Intermediate", "Advanced", "Expert"],
                ),
                select(
                    "timeline",
                    "Preferred fund launch timeline",
                    &["3-6 months", "6-12 months", "12+ months"],
                ),
            ],
            "Continue to Fund Setup",
        )),
        TaskTemplate::new(
            "Task Dependencies",
            "Complete tasks in order - each task unlocks the next",
        )
        .dialog(form(
            "Task Dependencies & Workflow",
            vec![
                select(
                    "workflow",
                    "How would you prefer to work through tasks?",
                    &[
                        "Sequential (one at a time)",
                        "Parallel (multiple at once)",
                        "Flexible (as needed)",
                    ],
                ),
                select(
                    "reminders",
                    "Would you like task completion reminders?",
                    &[
                        "Yes, email reminders",
                        "Yes, in-app notifications",
                        "No reminders needed",
                    ],
                ),
                select(
                    "collaboration",
                    "Will others be collaborating on this fund?",
                    &["Yes, team collaboration", "No, working solo", "Maybe later"],
                ),
            ],
            "Set Preferences",
        )),
        TaskTemplate::new(
            "Basic Fund Information",
            "Set up your basic fund profile and contact information",
        )
        .dialog(form(
            "Fund Profile Setup",
            vec![
                text("fundManager", "Fund Manager Name"),
                text("company", "Company/Firm Name"),
                email("email", "Contact Email"),
                FormField::new("phone", "Phone Number", FieldKind::Phone),
                text("location", "Primary Location"),
            ],
            "Save Profile",
        )),
        TaskTemplate::new(
            "Investment Preferences",
            "Define your investment philosophy and risk tolerance",
        )
        .dialog(form(
            "Investment Preferences",
            vec![
                select(
                    "riskTolerance",
                    "Risk Tolerance",
                    &["Conservative", "Moderate", "Aggressive"],
                ),
                select(
                    "investmentStyle",
                    "Investment Style",
                    &[
                        "Value Investing",
                        "Growth Investing",
                        "Income Focused",
                        "Opportunistic",
                    ],
                ),
                select(
                    "geographicFocus",
                    "Geographic Focus",
                    &["Local Markets", "Regional", "National", "International"],
                ),
                select(
                    "timeHorizon",
                    "Investment Time Horizon",
                    &["1-3 years", "3-7 years", "7-10 years", "10+ years"],
                ),
            ],
            "Set Preferences",
        )),
        TaskTemplate::new(
            "Platform Readiness Check",
            "Confirm you're ready to start building your fund",
        )
        .dialog(form(
            "Ready to Launch Your Fund?",
            vec![
                select(
                    "preparedness",
                    "How prepared do you feel to start?",
                    &["Very Prepared", "Somewhat Prepared", "Need More Guidance"],
                ),
                select(
                    "nextSteps",
                    "What would you like to do first?",
                    &[
                        "Start fund setup immediately",
                        "Explore fund categories more",
                        "Review platform features",
                    ],
                ),
                select(
                    "support",
                    "Do you need additional support?",
                    &[
                        "Yes, connect me with an advisor",
                        "Yes, provide more resources",
                        "No, I'm ready to proceed",
                    ],
                ),
            ],
            "Begin Fund Launch",
        )),
    ]
}

fn sfr_setup_tasks() -> Vec<TaskTemplate> {
    vec![
        TaskTemplate::new(
            "SFR Fund Setup",
            "Configure your Single-Family Rental fund parameters",
        )
        .dialog(form(
            "SFR Fund Configuration",
            vec![
                number("targetProperties", "Target Number of Properties"),
                textarea("targetMarkets", "Target Markets"),
                select(
                    "propertyTypes",
                    "Property Types",
                    &["Single Family Homes", "Townhouses", "Condos", "All Types"],
                ),
                select(
                    "acquisitionStrategy",
                    "Acquisition Strategy",
                    &["Wholesale", "Retail", "REO", "Off-Market"],
                ),
            ],
            "Configure SFR Fund",
        )),
        TaskTemplate::new(
            "SFR Investment Criteria",
            "Define your SFR investment criteria and underwriting standards",
        )
        .dialog(form(
            "SFR Investment Criteria",
            vec![
                text("priceRange", "Property Price Range ($)"),
                text("capRate", "Target Cap Rate Range"),
                text("cashOnCash", "Target Cash-on-Cash Return"),
                select(
                    "maxLeverage",
                    "Maximum Leverage Ratio",
                    &["60%", "70%", "75%", "80%"],
                ),
            ],
            "Set Investment Criteria",
        )),
    ]
}

fn sfr_skills() -> Vec<TaskTemplate> {
    vec![
        TaskTemplate::new(
            "Market Analysis Setup",
            "Configure your target markets and investment criteria",
        )
        .dialog(form(
            "Market Analysis Configuration",
            vec![
                select(
                    "targetMarkets",
                    "Target Markets",
                    &["Primary MSA", "Secondary MSA", "Tertiary MSA"],
                ),
                number("minCapRate", "Minimum Cap Rate (%)"),
                number("maxPrice", "Maximum Property Price ($)"),
                select(
                    "propertyTypes",
                    "Property Types",
                    &["Single Family", "Duplex", "Triplex", "Fourplex"],
                ),
            ],
            "Save Configuration",
        ))
        .hint("Set up your market analysis parameters"),
        TaskTemplate::new(
            "Property Acquisition Criteria",
            "Define specific property acquisition standards",
        )
        .dialog(form(
            "Acquisition Criteria",
            vec![
                number("yearBuilt", "Minimum Year Built"),
                number("sqftMin", "Minimum Square Footage"),
                number("bedrooms", "Minimum Bedrooms"),
                number("bathrooms", "Minimum Bathrooms"),
            ],
            "Set Criteria",
        )),
        TaskTemplate::new(
            "Financial Modeling Setup",
            "Configure financial projections and underwriting models",
        )
        .dialog(form(
            "Financial Model Setup",
            vec![
                number("holdPeriod", "Hold Period (Years)"),
                number("exitCapRate", "Exit Cap Rate (%)"),
                number("loanToValue", "Loan-to-Value Ratio (%)"),
                number("interestRate", "Interest Rate (%)"),
            ],
            "Configure Model",
        )),
        TaskTemplate::new(
            "Legal Entity Formation",
            "Set up the legal structure for your fund",
        )
        .dialog(form(
            "Legal Entity Setup",
            vec![
                text("entityName", "Entity Name"),
                select("entityType", "Entity Type", &["LLC", "LP", "Corporation"]),
                text("state", "State of Formation"),
                text("ein", "EIN Number"),
            ],
            "Form Entity",
        )),
        TaskTemplate::new(
            "Investor Accreditation",
            "Set up investor qualification and accreditation process",
        )
        .dialog(form(
            "Investor Accreditation Setup",
            vec![
                number("minInvestment", "Minimum Investment ($)"),
                number("maxInvestors", "Maximum Investors"),
                select(
                    "qualification",
                    "Qualification Method",
                    &["Self-Certification", "Third-Party Verification"],
                ),
            ],
            "Configure Accreditation",
        )),
        TaskTemplate::new(
            "Property Management Setup",
            "Configure property management and operations",
        )
        .dialog(form(
            "Property Management Configuration",
            vec![
                number("managementFee", "Management Fee (%)"),
                number("leasingFee", "Leasing Fee (%)"),
                number("maintenanceReserve", "Maintenance Reserve (%)"),
            ],
            "Set Management Terms",
        )),
        TaskTemplate::new(
            "Marketing Materials",
            "Create fund marketing and investor presentation materials",
        )
        .dialog(form(
            "Marketing Materials Setup",
            vec![
                text("fundName", "Fund Name"),
                text("tagline", "Fund Tagline"),
                number("targetRaise", "Target Raise Amount ($)"),
                textarea("description", "Fund Description"),
            ],
            "Create Materials",
        )),
        TaskTemplate::new("Fund Launch", "Launch your Single-Family Rental Fund").dialog(form(
            "Fund Launch Confirmation",
            vec![
                text("launchDate", "Launch Date"),
                select(
                    "confirmation",
                    "I confirm all requirements are met",
                    &["Yes", "No"],
                ),
            ],
            "Launch Fund",
        )),
        TaskTemplate::new(
            "Legal Entity Setup",
            "Establish the legal structure for your fund",
        )
        .dialog(form(
            "Legal Entity Configuration",
            vec![
                select(
                    "entityType",
                    "Entity Type",
                    &["LLC", "LP", "Trust", "Corporation"],
                ),
                text("state", "State of Formation"),
                text("ein", "EIN/Tax ID"),
                text("registeredAgent", "Registered Agent"),
            ],
            "Establish Entity",
        )),
        TaskTemplate::new(
            "Investor Accreditation Requirements",
            "Set up investor qualification and accreditation requirements",
        )
        .dialog(form(
            "Investor Accreditation Setup",
            vec![
                select(
                    "accreditation",
                    "Accreditation Required",
                    &[
                        "SEC Accredited Only",
                        "Non-Accredited Allowed",
                        "506(b) Private Placement",
                    ],
                ),
                number("minInvestment", "Minimum Investment ($)"),
                number("maxInvestors", "Maximum Number of Investors"),
                select(
                    "verification",
                    "Verification Method",
                    &["Self-Certification", "Third-Party Verification", "Both"],
                ),
            ],
            "Configure Accreditation",
        )),
    ]
}

fn commercial_setup_tasks() -> Vec<TaskTemplate> {
    vec![
        TaskTemplate::new(
            "Commercial Fund Setup",
            "Configure your Commercial Office/Retail fund parameters",
        )
        .dialog(form(
            "Commercial Fund Configuration",
            vec![
                select(
                    "propertyTypes",
                    "Property Types of Interest",
                    &[
                        "Office Buildings",
                        "Retail Centers",
                        "Industrial",
                        "Mixed-Use",
                        "All Types",
                    ],
                ),
                textarea("targetMarkets", "Target Markets"),
                select(
                    "leaseTerms",
                    "Preferred Lease Terms",
                    &["5+ years", "7+ years", "10+ years", "Flexible"],
                ),
                select(
                    "tenantQuality",
                    "Target Tenant Quality",
                    &[
                        "Investment Grade",
                        "Regional Credit",
                        "Local Credit",
                        "Mixed",
                    ],
                ),
            ],
            "Configure Commercial Fund",
        )),
        TaskTemplate::new(
            "Commercial Investment Criteria",
            "Define your commercial investment criteria and underwriting standards",
        )
        .dialog(form(
            "Commercial Investment Criteria",
            vec![
                text("propertySize", "Property Size Range (SF)"),
                text("capRate", "Target Cap Rate Range"),
                select(
                    "noiGrowth",
                    "Expected NOI Growth",
                    &["Stable", "Moderate Growth", "High Growth"],
                ),
                select(
                    "maxLeverage",
                    "Maximum Leverage Ratio",
                    &["60%", "65%", "70%", "75%"],
                ),
            ],
            "Set Investment Criteria",
        )),
    ]
}

fn commercial_skills() -> Vec<TaskTemplate> {
    vec![
        TaskTemplate::new(
            "Commercial Market Analysis",
            "Analyze commercial real estate markets and submarkets",
        )
        .dialog(form(
            "Commercial Market Analysis",
            vec![
                select(
                    "propertyTypes",
                    "Property Types",
                    &["Office", "Retail", "Industrial", "Mixed-Use"],
                ),
                number("marketSize", "Market Size (SF)"),
                number("vacancyRate", "Market Vacancy Rate (%)"),
                number("avgRent", "Average Rent ($/SF)"),
            ],
            "Analyze Market",
        ))
        .hint("Start with commercial market analysis"),
        TaskTemplate::new(
            "Tenant Analysis",
            "Research and analyze potential tenants and lease structures",
        )
        .dialog(form(
            "Tenant Analysis",
            vec![
                select(
                    "tenantCredit",
                    "Minimum Tenant Credit Rating",
                    &["AAA", "AA", "A", "BBB", "BB"],
                ),
                number("leaseTerm", "Minimum Lease Term (Years)"),
                number("escalation", "Rent Escalation (%)"),
                number("tenantImprovement", "Tenant Improvement Allowance ($/SF)"),
            ],
            "Complete Analysis",
        )),
        TaskTemplate::new(
            "Commercial Underwriting",
            "Set up commercial underwriting models and criteria",
        )
        .dialog(form(
            "Commercial Underwriting Setup",
            vec![
                number("capRate", "Target Cap Rate (%)"),
                number("irr", "Target IRR (%)"),
                number("ltv", "Maximum LTV (%)"),
                number("dscr", "Minimum DSCR"),
            ],
            "Set Underwriting Criteria",
        )),
        TaskTemplate::new(
            "Legal & Regulatory Setup",
            "Configure legal and regulatory compliance requirements",
        )
        .dialog(form(
            "Legal & Regulatory Setup",
            vec![
                select(
                    "regulatoryCompliance",
                    "Regulatory Compliance",
                    &["SEC Compliant", "Non-SEC"],
                ),
                select(
                    "environmental",
                    "Environmental Assessment Required",
                    &["Yes", "No"],
                ),
                textarea("insurance", "Insurance Requirements"),
            ],
            "Configure Compliance",
        )),
        TaskTemplate::new(
            "Asset Management Plan",
            "Develop comprehensive asset management strategy",
        )
        .dialog(form(
            "Asset Management Plan",
            vec![
                select(
                    "managementStyle",
                    "Management Style",
                    &["Active", "Passive", "Value-Add"],
                ),
                textarea("reinvestment", "Capital Reinvestment Strategy"),
                select(
                    "exitStrategy",
                    "Exit Strategy",
                    &["Sale", "Refinance", "Hold"],
                ),
            ],
            "Create Plan",
        )),
        TaskTemplate::new(
            "Commercial Fund Launch",
            "Launch your Commercial Office/Retail Fund",
        )
        .dialog(form(
            "Commercial Fund Launch",
            vec![
                number("fundSize", "Target Fund Size ($)"),
                text("launchDate", "Launch Date"),
                select("confirmation", "All requirements met", &["Yes", "No"]),
            ],
            "Launch Commercial Fund",
        )),
        TaskTemplate::new(
            "Commercial Legal Setup",
            "Establish legal structure and compliance for commercial fund",
        )
        .dialog(form(
            "Commercial Legal Structure",
            vec![
                select("entityType", "Entity Type", &["LLC", "LP", "Trust", "REIT"]),
                select(
                    "regulatory",
                    "Regulatory Compliance",
                    &["SEC Compliant", "Non-SEC", "506(c) Reg D"],
                ),
                textarea("insurance", "Insurance Requirements"),
                select(
                    "contracts",
                    "Standard Contract Templates",
                    &["Need templates", "Have existing", "Will create custom"],
                ),
            ],
            "Establish Legal Structure",
        )),
        TaskTemplate::new(
            "Property Management Network",
            "Build network of property management and leasing partners",
        )
        .dialog(form(
            "Property Management Setup",
            vec![
                textarea("managementPartners", "Property Management Partners"),
                textarea("leasingAgents", "Leasing Agent Network"),
                textarea("maintenance", "Maintenance Contractor Network"),
                select(
                    "technology",
                    "Property Management Software",
                    &["Yardi", "MRI", "AppFolio", "Buildium", "Other"],
                ),
            ],
            "Build Management Network",
        )),
    ]
}

fn specialty_setup_tasks() -> Vec<TaskTemplate> {
    vec![
        TaskTemplate::new(
            "Specialty Fund Setup",
            "Configure your Specialty/Niche Asset fund parameters",
        )
        .dialog(form(
            "Specialty Fund Configuration",
            vec![
                select(
                    "nicheFocus",
                    "Niche Asset Focus",
                    &[
                        "Self-Storage",
                        "Mobile Home Parks",
                        "Data Centers",
                        "Healthcare",
                        "Senior Living",
                        "Student Housing",
                        "Other",
                    ],
                ),
                textarea("targetMarkets", "Target Markets"),
                select(
                    "assetStrategy",
                    "Asset Strategy",
                    &["Core", "Value-Add", "Development", "Opportunistic"],
                ),
                select(
                    "marketPosition",
                    "Market Position",
                    &["First Mover", "Fast Follower", "Established Player"],
                ),
            ],
            "Configure Specialty Fund",
        )),
        TaskTemplate::new(
            "Specialty Investment Criteria",
            "Define your specialty investment criteria and underwriting standards",
        )
        .dialog(form(
            "Specialty Investment Criteria",
            vec![
                text("assetSize", "Asset Size Range"),
                select(
                    "riskProfile",
                    "Risk Profile",
                    &["Low Risk", "Moderate Risk", "High Risk"],
                ),
                select(
                    "growthPotential",
                    "Growth Potential",
                    &["Stable Cash Flow", "Moderate Growth", "High Growth"],
                ),
                select(
                    "exitStrategy",
                    "Preferred Exit Strategy",
                    &[
                        "Hold Long-Term",
                        "5-7 Year Hold",
                        "3-5 Year Hold",
                        "Opportunistic",
                    ],
                ),
            ],
            "Set Investment Criteria",
        )),
    ]
}

/// Index of "Operations Setup" within [`specialty_skills`].
const OPERATIONS_SETUP_SKILL: usize = 3;

/// Specialty skills follow the setup tasks, so dependency positions are
/// offset by the setup length.
fn specialty_skills() -> Vec<TaskTemplate> {
    let operations_setup = specialty_setup_tasks()
        .len()
        .saturating_add(OPERATIONS_SETUP_SKILL);
    vec![
        TaskTemplate::new(
            "Niche Market Identification",
            "Identify and analyze specialty/niche real estate markets",
        )
        .dialog(form(
            "Niche Market Analysis",
            vec![
                select(
                    "nicheType",
                    "Niche Type",
                    &[
                        "Self-Storage",
                        "Data Centers",
                        "Senior Housing",
                        "Student Housing",
                        "Healthcare",
                    ],
                ),
                textarea("marketDemand", "Market Demand Analysis"),
                textarea("competition", "Competitive Analysis"),
                select(
                    "growthPotential",
                    "Growth Potential",
                    &["High", "Medium", "Low"],
                ),
            ],
            "Identify Niche",
        ))
        .hint("Start by identifying your specialty niche"),
        TaskTemplate::new(
            "Specialty Underwriting Model",
            "Develop underwriting models specific to your niche",
        )
        .dialog(form(
            "Specialty Underwriting Setup",
            vec![
                select(
                    "valuationMethod",
                    "Valuation Method",
                    &["Income", "Cost", "Sales Comparison"],
                ),
                textarea("riskFactors", "Risk Factors"),
                textarea("returnMetrics", "Key Return Metrics"),
            ],
            "Set Underwriting Model",
        )),
        TaskTemplate::new(
            "Regulatory Compliance",
            "Address niche-specific regulatory and compliance requirements",
        )
        .dialog(form(
            "Regulatory Compliance Setup",
            vec![
                textarea("licenses", "Required Licenses"),
                textarea("certifications", "Required Certifications"),
                textarea("compliance", "Compliance Requirements"),
            ],
            "Configure Compliance",
        )),
        TaskTemplate::new(
            "Operations Setup",
            "Set up operational requirements for your specialty assets",
        )
        .dialog(form(
            "Operations Configuration",
            vec![
                textarea("management", "Management Requirements"),
                textarea("maintenance", "Maintenance Protocols"),
                textarea("technology", "Technology Requirements"),
            ],
            "Set Operations",
        )),
        TaskTemplate::new(
            "Specialty Fund Launch",
            "Launch your Specialty/Niche Asset Fund",
        )
        .dialog(form(
            "Specialty Fund Launch",
            vec![
                text("fundFocus", "Fund Focus"),
                number("targetSize", "Target Fund Size ($)"),
                text("launchDate", "Launch Date"),
                select("confirmation", "Ready to launch", &["Yes", "No"]),
            ],
            "Launch Specialty Fund",
        )),
        TaskTemplate::new(
            "Industry Partnerships",
            "Develop partnerships with industry specialists and operators",
        )
        .dialog(form(
            "Industry Partnerships",
            vec![
                textarea("operators", "Key Industry Operators"),
                textarea("advisors", "Specialty Advisors/Consultants"),
                textarea("vendors", "Specialized Vendors/Suppliers"),
                textarea("networks", "Industry Networks/Memberships"),
            ],
            "Establish Partnerships",
        )),
        TaskTemplate::new(
            "Niche Marketing Strategy",
            "Develop targeted marketing strategy for your specialty niche",
        )
        .depends_on([operations_setup])
        .dialog(form(
            "Niche Marketing Strategy",
            vec![
                textarea("targetAudience", "Target Investor Audience"),
                textarea("messaging", "Key Marketing Messages"),
                select(
                    "channels",
                    "Marketing Channels",
                    &[
                        "Industry Events",
                        "Direct Outreach",
                        "Digital Marketing",
                        "Referrals",
                        "All Channels",
                    ],
                ),
                textarea("differentiation", "Competitive Differentiation"),
            ],
            "Create Marketing Strategy",
        )),
    ]
}
