//! Closed vocabularies used by the skill classifier.
//!
//! Every table is immutable static data. Lookup goes through `bucket_of`,
//! which resolves overlaps by bucket priority (frontend first, web3 last).

use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;

use crate::models::skill_matrix::SkillBucket;

pub const FRONTEND: &[&str] = &[
    "react",
    "next",
    "vue",
    "nuxt",
    "angular",
    "svelte",
    "typescript",
    "javascript",
    "tailwind",
    "redux",
    "html",
    "css",
    "sass",
    "scss",
    "jquery",
    "vite",
    "webpack",
    "storybook",
    "zustand",
];

pub const BACKEND: &[&str] = &[
    "node",
    "express",
    "nest",
    "python",
    "django",
    "flask",
    "ruby",
    "rails",
    "java",
    "spring",
    "go",
    "golang",
    "php",
    "laravel",
    "postgres",
    "mysql",
    "mongodb",
    "prisma",
    "typeorm",
    "graphql",
    "rust",
    "c#",
    "kotlin",
    "scala",
    "elixir",
    "fastapi",
    "redis",
    "kafka",
    "rabbitmq",
    "grpc",
];

pub const DEVOPS: &[&str] = &[
    "docker",
    "kubernetes",
    "k8s",
    "terraform",
    "ansible",
    "aws",
    "gcp",
    "azure",
    "ci/cd",
    "github-actions",
    "gitlab-ci",
    "helm",
    "prometheus",
    "grafana",
    "jenkins",
    "circleci",
    "argocd",
    "pulumi",
    "nginx",
    "linux",
];

pub const WEB3: &[&str] = &[
    "solidity",
    "evm",
    "wagmi",
    "viem",
    "hardhat",
    "foundry",
    "ethers",
    "web3.js",
    "metamask",
    "openzeppelin",
    "merkle",
    "staking",
    "defi",
    "erc20",
    "erc721",
    "erc1155",
    "web3",
    "ethereum",
    "chainlink",
    "ipfs",
    "nft",
];

/// Alternate spellings that do not reduce to a vocabulary entry by
/// dropping a `.js` / `js` suffix.
const ALIASES: &[(&str, &str)] = &[
    ("postgresql", "postgres"),
    ("psql", "postgres"),
    ("mongo", "mongodb"),
    ("tailwindcss", "tailwind"),
    ("ts", "typescript"),
    ("js", "javascript"),
    ("kubernetes.io", "kubernetes"),
    ("ci-cd", "ci/cd"),
    ("cicd", "ci/cd"),
    ("nfts", "nft"),
];

/// Filler and job-ad words that are never reported as skills.
const STOPWORDS: &[&str] = &[
    // job-ad boilerplate
    "developer", "developers", "engineer", "engineers", "engineering", "we", "are",
    "looking", "for", "someone", "who", "is", "extremely", "motivated", "and",
    "willing", "to", "learn", "this", "great", "opportunity", "join", "fast-growing",
    "company", "where", "you", "will", "work", "with", "should", "be", "passionate",
    "about", "technology", "interested", "in", "on", "continuous", "learning", "ready",
    "collaborate", "team", "teams", "members", "across", "different", "time", "zones",
    "cultures", "must", "must-have", "nice-to-have", "nice", "have", "requirements",
    "required", "responsibilities", "qualifications", "salary", "compensation", "bonus",
    "benefits", "remote", "onsite", "on-site", "hybrid", "office", "full-time",
    "part-time", "contract", "role", "position", "title", "job", "experience",
    "experienced", "years", "year", "knowledge", "skills", "ability", "strong", "plus",
    // seniority words are reported through the seniority field
    "senior", "junior", "mid", "middle", "lead", "staff", "principal", "sr", "jr",
    // pay periods and currencies
    "per", "annum", "annual", "annually", "monthly", "month", "weekly", "week", "daily",
    "hourly", "hour", "usd", "eur", "gbp", "pln", "uah", "dollars", "euro", "euros",
    "min", "max", "from", "up", "gross", "net",
    // months
    "january", "february", "march", "april", "may", "june", "july", "august",
    "september", "october", "november", "december",
    // function words
    "the", "a", "an", "of", "or", "as", "at", "by", "our", "your", "us", "it", "its",
    "that", "these", "those", "can", "has", "all", "any", "some", "more", "most", "new",
    "other", "own", "etc", "e.g", "i.e", "not", "but", "if", "via", "using", "use",
    "including", "into", "over", "both", "well",
];

lazy_static! {
    static ref BUCKET_INDEX: HashMap<&'static str, SkillBucket> = {
        let tables = [
            (SkillBucket::Frontend, FRONTEND),
            (SkillBucket::Backend, BACKEND),
            (SkillBucket::Devops, DEVOPS),
            (SkillBucket::Web3, WEB3),
        ];
        let mut index = HashMap::new();
        for (bucket, words) in tables {
            for &word in words {
                // Earlier (higher priority) buckets keep overlapping words.
                index.entry(word).or_insert(bucket);
            }
        }
        index
    };
    static ref ALIAS_INDEX: HashMap<&'static str, &'static str> = ALIASES.iter().copied().collect();
    static ref STOPWORD_SET: HashSet<&'static str> = STOPWORDS.iter().copied().collect();
}

/// Bucket of a canonical lowercase skill, `None` when it is not in any vocabulary.
pub fn bucket_of(skill: &str) -> Option<SkillBucket> {
    BUCKET_INDEX.get(skill).copied()
}

pub fn alias_of(token: &str) -> Option<&'static str> {
    ALIAS_INDEX.get(token).copied()
}

pub fn is_stopword(token: &str) -> bool {
    STOPWORD_SET.contains(token)
}
