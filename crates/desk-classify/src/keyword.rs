//! Keyword-rule classifier

use crate::text;
use crate::{Classification, Classifier};
use desk_common::SkillTag;
use tracing::debug;

/// Per-skill keyword table. A skill is required when any of its keywords
/// appears in the ticket text.
const SKILL_KEYWORDS: &[(&str, &[&str])] = &[
    ("Networking", &["network", "connection", "connectivity", "lan", "wan"]),
    ("VPN_Troubleshooting", &["vpn", "tunnel", "remote access", "connection dropping"]),
    ("Linux_Administration", &["linux", "ubuntu", "debian", "centos", "bash", "shell"]),
    ("Cloud_AWS", &["aws", "amazon", "ec2", "s3", "lambda"]),
    ("Cloud_Azure", &["azure", "microsoft cloud", "app service"]),
    ("Hardware_Diagnostics", &["hardware", "laptop", "desktop", "fan", "battery"]),
    ("Windows_Server_2022", &["windows server", "server 2022"]),
    ("Active_Directory", &["active directory", "domain controller", "ldap", "group policy"]),
    ("Microsoft_365", &["microsoft 365", "m365", "office 365", "outlook", "teams"]),
    ("Network_Security", &["firewall", "breach", "attack", "vulnerability"]),
    ("Database_SQL", &["database", "sql", "query", "mysql", "postgresql"]),
    ("SharePoint_Online", &["sharepoint", "document library", "site collection"]),
    ("PowerShell_Scripting", &["powershell", "ps1"]),
    ("Endpoint_Security", &["endpoint", "antivirus", "malware", "edr"]),
    ("DevOps_CI_CD", &["devops", "ci/cd", "jenkins", "pipeline", "deployment"]),
    ("Kubernetes_Docker", &["kubernetes", "k8s", "docker", "container", "pod"]),
    ("Voice_VoIP", &["voip", "telephony", "sip"]),
    ("Printer_Troubleshooting", &["printer", "printing"]),
    ("Mac_OS", &["macos", "osx", "macbook"]),
    ("Phishing_Analysis", &["phishing", "spam", "suspicious email", "scam"]),
    ("SSL_Certificates", &["ssl", "tls", "certificate", "https"]),
    ("DNS_Configuration", &["dns", "nameserver", "resolution"]),
    ("Identity_Management", &["identity", "iam", "okta", "sso", "authentication"]),
    ("Virtualization_VMware", &["vmware", "esxi", "vcenter", "virtual machine"]),
];

/// Rule-based classifier over per-skill keyword tables.
///
/// The default normalizer: cheap, transparent, no model artifacts.
#[derive(Debug, Default)]
pub struct KeywordClassifier;

impl KeywordClassifier {
    /// Create the classifier
    pub fn new() -> Self {
        Self
    }
}

impl Classifier for KeywordClassifier {
    fn classify(&self, subject: &str, description: &str) -> Classification {
        let text = text::combined(subject, description);

        let required_skills = SKILL_KEYWORDS
            .iter()
            .filter(|(_, keywords)| keywords.iter().any(|k| text.contains(k)))
            .filter_map(|(skill, _)| SkillTag::new(*skill).ok())
            .collect();

        let classification = Classification {
            required_skills,
            priority: text::priority(&text),
            business_impact: text::business_impact(&text),
        };
        debug!(
            skills = classification.required_skills.len(),
            priority = %classification.priority,
            "keyword classification"
        );
        classification
    }
}
