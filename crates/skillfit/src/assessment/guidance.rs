use super::scoring::Recommendation;

/// Fixed guidance lists attached to a recommendation tier.
#[derive(Debug)]
pub struct Guidance {
    pub next_steps: &'static [&'static str],
    pub career_alignment: &'static [&'static str],
    pub ideal_path: &'static [&'static str],
}

const STRONG_FIT: Guidance = Guidance {
    next_steps: &[
        "Sign up for a Snowflake trial account and load a sample dataset",
        "Complete the SnowPro Core certification study guide",
        "Build an end-to-end ELT pipeline with Snowpipe, streams, and tasks",
        "Publish a portfolio project that models data with dbt on Snowflake",
    ],
    career_alignment: &[
        "Snowflake Data Engineer",
        "Cloud Data Architect",
        "ETL/ELT Developer",
        "DataOps Engineer",
        "Data Platform Engineer",
    ],
    ideal_path: &[
        "Snowflake fundamentals: architecture, warehouses, and storage",
        "Advanced SQL and performance tuning",
        "Data loading and transformation with Snowpipe and dbt",
        "Security, governance, and data sharing",
        "SnowPro Core, then SnowPro Advanced: Data Engineer",
    ],
};

const DEVELOPING_FIT: Guidance = Guidance {
    next_steps: &[
        "Strengthen SQL with daily practice on joins, window functions, and aggregations",
        "Take an introductory cloud data warehousing course",
        "Recreate a small reporting workload in a Snowflake trial account",
        "Retake this assessment after three months of focused study",
    ],
    career_alignment: &[
        "BI Engineer/Analyst",
        "ETL/ELT Developer",
        "Junior Data Engineer",
    ],
    ideal_path: &[
        "SQL foundations and relational data modeling",
        "Cloud computing basics (AWS, Azure, or GCP)",
        "Snowflake fundamentals with hands-on labs",
        "Guided pipeline project with mentor feedback",
        "SnowPro Core certification",
    ],
};

const EXPLORATORY_FIT: Guidance = Guidance {
    next_steps: &[
        "Explore data analysis with spreadsheets and visualization tools",
        "Try a free introductory SQL course to gauge your interest",
        "Talk with data professionals about their day-to-day work",
        "Consider adjacent roles that use data without heavy engineering",
    ],
    career_alignment: &[
        "Data Analyst",
        "Business Analyst",
        "Technical Project Coordinator",
    ],
    ideal_path: &[
        "Spreadsheet analysis and data literacy",
        "Introductory SQL",
        "Dashboarding with a BI tool",
        "Revisit cloud data platforms once fundamentals feel comfortable",
    ],
};

/// Guidance for a recommendation tier; a pure lookup.
pub fn guidance_for(recommendation: Recommendation) -> &'static Guidance {
    match recommendation {
        Recommendation::Yes => &STRONG_FIT,
        Recommendation::Maybe => &DEVELOPING_FIT,
        Recommendation::No => &EXPLORATORY_FIT,
    }
}

pub(crate) fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}
