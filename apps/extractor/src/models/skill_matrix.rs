use serde::{Deserialize, Serialize};

/// Seniority level inferred for the role. Serialized lowercase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Seniority {
    Junior,
    Mid,
    Senior,
    Lead,
    #[default]
    Unknown,
}

/// Salary currency. Serialized as the ISO code (`USD`, `EUR`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Eur,
    Pln,
    Gbp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Salary {
    pub currency: Currency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<u64>,
}

/// The five mutually exclusive skill categories, in lookup priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillBucket {
    Frontend,
    Backend,
    Devops,
    Web3,
    Other,
}

impl SkillBucket {
    pub const ALL: [SkillBucket; 5] = [
        SkillBucket::Frontend,
        SkillBucket::Backend,
        SkillBucket::Devops,
        SkillBucket::Web3,
        SkillBucket::Other,
    ];

    /// JSON field name of the bucket.
    pub fn as_str(self) -> &'static str {
        match self {
            SkillBucket::Frontend => "frontend",
            SkillBucket::Backend => "backend",
            SkillBucket::Devops => "devops",
            SkillBucket::Web3 => "web3",
            SkillBucket::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillBuckets {
    pub frontend: Vec<String>,
    pub backend: Vec<String>,
    pub devops: Vec<String>,
    pub web3: Vec<String>,
    pub other: Vec<String>,
}

impl SkillBuckets {
    pub fn get(&self, bucket: SkillBucket) -> &[String] {
        match bucket {
            SkillBucket::Frontend => &self.frontend,
            SkillBucket::Backend => &self.backend,
            SkillBucket::Devops => &self.devops,
            SkillBucket::Web3 => &self.web3,
            SkillBucket::Other => &self.other,
        }
    }

    /// Appends `skill` to `bucket` unless it is already there.
    pub fn push_unique(&mut self, bucket: SkillBucket, skill: &str) {
        let list = match bucket {
            SkillBucket::Frontend => &mut self.frontend,
            SkillBucket::Backend => &mut self.backend,
            SkillBucket::Devops => &mut self.devops,
            SkillBucket::Web3 => &mut self.web3,
            SkillBucket::Other => &mut self.other,
        };
        if !list.iter().any(|s| s == skill) {
            list.push(skill.to_string());
        }
    }

    /// Iterates buckets in priority order together with their contents.
    pub fn iter(&self) -> impl Iterator<Item = (SkillBucket, &[String])> {
        SkillBucket::ALL.into_iter().map(move |b| (b, self.get(b)))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().all(|(_, skills)| skills.is_empty())
    }
}

/// Structured summary of a job description.
///
/// Field names match the JSON contract consumed by the API and UI layers
/// (`mustHave`, `niceToHave`, ...). `salary` is omitted when unresolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillMatrix {
    pub title: String,
    pub seniority: Seniority,
    pub skills: SkillBuckets,
    pub must_have: Vec<String>,
    pub nice_to_have: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<Salary>,
    pub summary: String,
}

impl SkillMatrix {
    /// Trims every string field in place of the schema's trim transform.
    /// Used on records coming from an untrusted producer before validation.
    pub fn trimmed(self) -> Self {
        fn trim_all(values: Vec<String>) -> Vec<String> {
            values.into_iter().map(|v| v.trim().to_string()).collect()
        }

        SkillMatrix {
            title: self.title.trim().to_string(),
            seniority: self.seniority,
            skills: SkillBuckets {
                frontend: trim_all(self.skills.frontend),
                backend: trim_all(self.skills.backend),
                devops: trim_all(self.skills.devops),
                web3: trim_all(self.skills.web3),
                other: trim_all(self.skills.other),
            },
            must_have: trim_all(self.must_have),
            nice_to_have: trim_all(self.nice_to_have),
            salary: self.salary,
            summary: self.summary.trim().to_string(),
        }
    }
}
