//! Static portfolio content: the words and numbers every section shows.

use crate::core::toast::Severity;

pub const DEFAULT_OWNER: &str = "Rahul Maurya";

pub const PHRASES: &[&str] = &[
    "SOC Analyst & Threat Hunter",
    "MITRE ATT&CK Practitioner",
    "Incident Response Specialist",
    "Security Automation Engineer",
    "Digital Defender",
];

/// Hero stat counters: (label, target).
pub const STATS: &[(&str, u32)] = &[
    ("Alerts Triaged", 1500),
    ("Incidents Closed", 150),
    ("Detection Rules", 48),
    ("Certifications", 6),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Command,
    Output,
    Blank,
    Prompt,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScriptLine {
    pub kind: LineKind,
    pub text: &'static str,
}

const fn line(kind: LineKind, text: &'static str) -> ScriptLine {
    ScriptLine { kind, text }
}

pub const TERMINAL_SCRIPT: &[ScriptLine] = &[
    line(LineKind::Command, "$ whoami"),
    line(LineKind::Output, "rahul_maurya - SOC Analyst"),
    line(LineKind::Blank, ""),
    line(LineKind::Command, "$ cat profile.txt"),
    line(
        LineKind::Output,
        "SOC Analyst with expertise in monitoring, detecting,\nanalyzing, and responding to cybersecurity incidents.",
    ),
    line(LineKind::Blank, ""),
    line(LineKind::Command, "$ echo $MISSION"),
    line(LineKind::Output, "Continuously improve detection & incident response."),
    line(LineKind::Blank, ""),
    line(LineKind::Command, "$ skills --list"),
    line(
        LineKind::Output,
        "✓ Threat Hunting  ✓ SIEM/Splunk  ✓ Python\n✓ EDR/CrowdStrike  ✓ NIST IR  ✓ SOAR",
    ),
    line(LineKind::Prompt, "$"),
];

/// Radar metrics: (label, value in [0, 1]).
pub const RADAR_METRICS: &[(&str, f64)] = &[
    ("Threat\nAnalysis", 0.95),
    ("SIEM", 0.92),
    ("IR", 0.88),
    ("Network", 0.85),
    ("Coding", 0.80),
    ("EDR", 0.89),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillCategory {
    Soc,
    Tools,
    Code,
}

pub struct Skill {
    pub name: &'static str,
    pub category: SkillCategory,
    pub level: u8,
}

pub const SKILLS: &[Skill] = &[
    Skill { name: "Threat Hunting", category: SkillCategory::Soc, level: 92 },
    Skill { name: "Incident Response", category: SkillCategory::Soc, level: 88 },
    Skill { name: "MITRE ATT&CK Mapping", category: SkillCategory::Soc, level: 90 },
    Skill { name: "Splunk / SIEM", category: SkillCategory::Tools, level: 92 },
    Skill { name: "CrowdStrike EDR", category: SkillCategory::Tools, level: 86 },
    Skill { name: "Wireshark", category: SkillCategory::Tools, level: 80 },
    Skill { name: "Python", category: SkillCategory::Code, level: 82 },
    Skill { name: "Bash / PowerShell", category: SkillCategory::Code, level: 75 },
];

pub struct Cert {
    pub name: &'static str,
    pub issuer: &'static str,
    pub progress: u8,
}

pub const CERTS: &[Cert] = &[
    Cert { name: "CompTIA Security+", issuer: "CompTIA", progress: 100 },
    Cert { name: "Splunk Core Certified User", issuer: "Splunk", progress: 100 },
    Cert { name: "Blue Team Level 1", issuer: "Security Blue Team", progress: 100 },
    Cert { name: "Certified SOC Analyst", issuer: "EC-Council", progress: 100 },
    Cert { name: "GCIH", issuer: "GIAC", progress: 65 },
    Cert { name: "OSCP", issuer: "Offensive Security", progress: 30 },
];

pub struct Project {
    pub title: &'static str,
    pub summary: &'static str,
    pub detail: &'static str,
    pub tags: &'static [&'static str],
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "SIEM Detection Lab",
        summary: "Home lab ingesting Sysmon and firewall logs into Splunk.",
        detail: "Built a Splunk lab with Sysmon, pfSense and Windows event forwarding. \
                 Wrote 30+ correlation searches mapped to ATT&CK techniques and tuned \
                 them against replayed attack data to cut false positives by 40%.",
        tags: &["Splunk", "Sysmon", "ATT&CK"],
    },
    Project {
        title: "Phishing Triage Automation",
        summary: "SOAR playbook that enriches and scores reported emails.",
        detail: "Python playbook pulling reported mail from a shared inbox, detonating \
                 URLs and attachments in a sandbox, enriching IOCs against threat feeds \
                 and opening a ticket with a verdict. Median triage time dropped from \
                 20 minutes to 3.",
        tags: &["Python", "SOAR", "Threat Intel"],
    },
    Project {
        title: "Ransomware Tabletop",
        summary: "NIST-aligned incident response exercise for a mid-size org.",
        detail: "Designed and ran a four-hour ransomware tabletop following NIST 800-61. \
                 Produced an updated IR runbook, an escalation matrix and a list of \
                 twelve detection gaps with owners and due dates.",
        tags: &["NIST IR", "Runbooks"],
    },
    Project {
        title: "EDR Hunting Queries",
        summary: "Library of CrowdStrike hunting queries for LOLBins.",
        detail: "Collected and documented forty hunting queries targeting living-off-the-land \
                 binaries, credential access and persistence. Each query ships with test \
                 data, expected noise and a triage checklist.",
        tags: &["CrowdStrike", "Threat Hunting"],
    },
];

pub struct Milestone {
    pub period: &'static str,
    pub role: &'static str,
    pub org: &'static str,
    pub summary: &'static str,
}

pub const TIMELINE: &[Milestone] = &[
    Milestone {
        period: "2021",
        role: "IT Support Intern",
        org: "Regional ISP",
        summary: "Endpoint support, first exposure to firewall and AV alerts.",
    },
    Milestone {
        period: "2022",
        role: "Junior SOC Analyst",
        org: "MSSP",
        summary: "Tier-1 triage across 40 customer tenants in Splunk and QRadar.",
    },
    Milestone {
        period: "2023",
        role: "SOC Analyst",
        org: "MSSP",
        summary: "Tier-2 investigations, phishing automation, detection tuning.",
    },
    Milestone {
        period: "2024",
        role: "Threat Hunter",
        org: "Financial Services",
        summary: "Hypothesis-driven hunts with CrowdStrike and Splunk, IR on-call lead.",
    },
];

pub const THREAT_LEVELS: &[&str] = &["LOW", "MODERATE", "ELEVATED", "HIGH", "CRITICAL"];

/// Scripted notification feed: (delay from start, message, severity).
pub const NOTIFICATIONS: &[(u64, &str, Severity)] = &[
    (8_000, "● New IOC matched in threat feed", Severity::Critical),
    (15_000, "● Unusual outbound traffic - 10.0.0.42", Severity::Warn),
    (22_000, "✓ SIEM rule updated - RansomDetect v2.1", Severity::Info),
    (31_000, "● Failed login spike - 89 attempts in 60s", Severity::Critical),
    (42_000, "● Certificate expiring in 7 days - vpn.corp", Severity::Warn),
    (55_000, "✓ EDR quarantined suspicious process", Severity::Info),
];

pub const GREETING_DELAY_MS: u64 = 1_500;

/// Greeting for the given local hour (0..24).
pub fn greeting(hour: u32, owner: &str) -> String {
    let part = if hour < 12 {
        "Good morning"
    } else if hour < 18 {
        "Good afternoon"
    } else {
        "Good evening"
    };
    format!("{part} - Welcome to {owner}'s Portfolio")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_follows_hour() {
        assert!(greeting(0, "A").starts_with("Good morning"));
        assert!(greeting(11, "A").starts_with("Good morning"));
        assert!(greeting(12, "A").starts_with("Good afternoon"));
        assert!(greeting(17, "A").starts_with("Good afternoon"));
        assert!(greeting(18, "A").starts_with("Good evening"));
        assert!(greeting(23, "Ada").ends_with("Ada's Portfolio"));
    }

    #[test]
    fn radar_values_are_fractions() {
        assert!(RADAR_METRICS.iter().all(|(_, v)| (0.0..=1.0).contains(v)));
    }

    #[test]
    fn script_ends_with_prompt() {
        assert_eq!(TERMINAL_SCRIPT.last().map(|l| l.kind), Some(LineKind::Prompt));
    }
}
