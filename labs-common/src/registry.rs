//! Static lab registry
//!
//! Every lab the site serves is declared here at compile time. Nothing
//! mutates the table; lookups that miss return `None` and the caller picks
//! its own fallback.

use crate::lab::{LabConfig, LabSection};

/// Ordered mapping from lab id to its configuration
#[derive(Debug)]
pub struct LabRegistry {
    entries: &'static [(&'static str, LabConfig)],
}

impl LabRegistry {
    pub const fn new(entries: &'static [(&'static str, LabConfig)]) -> Self {
        Self { entries }
    }

    pub fn get(&self, id: &str) -> Option<&'static LabConfig> {
        self.entries
            .iter()
            .find(|(lab_id, _)| *lab_id == id)
            .map(|(_, config)| config)
    }

    /// Labs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static LabConfig)> {
        self.entries.iter().map(|(id, config)| (*id, config))
    }

    pub fn ids(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|(id, _)| *id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub static LAB_REGISTRY: LabRegistry = LabRegistry::new(LABS);

const LABS: &[(&str, LabConfig)] = &[
    ("lab1", LAB1),
    ("lab2", LAB2),
    ("lab3", LAB3),
    ("lab4", LAB4),
];

const LAB1: LabConfig = LabConfig {
    title: "Lab 1: Environment Setup & Project Introduction",
    sections: &[
        LabSection::new("overview", "Lab Overview"),
        LabSection::new("part-a", "Part A: Create Accounts"),
        LabSection::new("github-setup", "1. GitHub Setup"),
        LabSection::new("gemini-api", "2. Google Gemini API"),
        LabSection::new("aws-account", "3. AWS Account"),
        LabSection::new("neon-database", "4. Neon Database"),
        LabSection::new("resend-email", "5. Resend Email"),
        LabSection::new("part-b", "Part B: Install Tools"),
        LabSection::new("nodejs", "1. Node.js Installation"),
        LabSection::new("python", "2. Python Installation"),
        LabSection::new("git", "3. Git Installation"),
        LabSection::new("vscode", "4. VS Code"),
        LabSection::new("part-c", "Part C: Project Setup"),
        LabSection::new("fork-repo", "1. Fork Repository"),
        LabSection::new("clone-fork", "2. Clone Your Fork"),
        LabSection::new("install-deps", "3. Install Dependencies"),
        LabSection::new("env-config", "4. Environment Config"),
        LabSection::new("run-app", "5. Run Application"),
        LabSection::new("test-flow", "6. Test Complete Flow"),
        LabSection::new("troubleshooting", "Troubleshooting"),
    ],
};

const LAB2: LabConfig = LabConfig {
    title: "Lab 2: AI Lifecycle & MLOps Integration",
    sections: &[
        LabSection::new("overview", "Lab Overview"),
        LabSection::new("prerequisites", "Prerequisites"),
        LabSection::new("database-setup", "Database Setup"),
        LabSection::new("part-a", "Part A: Flask MLOps Service"),
        LabSection::new("project-structure", "1. Project Structure"),
        LabSection::new("python-deps", "2. Python Dependencies"),
        LabSection::new("env-vars", "3. Environment Variables"),
        LabSection::new("flask-app", "4. Flask Application"),
        LabSection::new("startup-script", "5. Startup Script"),
        LabSection::new("test-flask", "6. Test Flask Service"),
        LabSection::new("part-b", "Part B: Prometheus Integration"),
        LabSection::new("prometheus-setup", "1. Prometheus Setup"),
        LabSection::new("metrics-endpoint", "2. Metrics Endpoint"),
        LabSection::new("prometheus-logging", "3. Prometheus Logging"),
        LabSection::new("update-tracking", "4. Update Tracking"),
        LabSection::new("test-prometheus", "5. Test Prometheus"),
        LabSection::new("part-c", "Part C: Next.js Integration"),
        LabSection::new("troubleshooting", "Troubleshooting"),
    ],
};

const LAB3: LabConfig = LabConfig {
    title: "Lab 3: Testing AI Systems",
    sections: &[
        LabSection::new("overview", "Lab Overview"),
        LabSection::new("prerequisites", "Prerequisites Check"),
        LabSection::new("part-a", "Part A: Install Testing Tools"),
        LabSection::new("pytest-setup", "1. Install Pytest"),
        LabSection::new("part-b", "Part B: Understanding Tests"),
        LabSection::new("test-structure", "1. Test File Overview"),
        LabSection::new("test-categories", "2. Test Categories"),
        LabSection::new("part-c", "Part C: Running Tests"),
        LabSection::new("basic-test-run", "1. Basic Test Execution"),
        LabSection::new("test-output", "2. Understanding Output"),
        LabSection::new("test-scenarios", "3. Test Scenarios"),
        LabSection::new("part-d", "Part D: Test-Driven Development"),
        LabSection::new("add-test", "1. Add Your Own Test"),
        LabSection::new("optional-configs", "2. Optional Configuration"),
        LabSection::new("part-e", "Part E: Integration Testing"),
        LabSection::new("end-to-end", "1. End-to-End Test"),
        LabSection::new("ai-integration", "2. AI Integration Test"),
        LabSection::new("troubleshooting", "Troubleshooting"),
    ],
};

const LAB4: LabConfig = LabConfig {
    title: "Lab 4: Deployment Pipelines (CI/CD)",
    sections: &[
        LabSection::new("overview", "Lab Overview"),
        LabSection::new("prerequisites", "Prerequisites Check"),
        LabSection::new("part-a", "Part A: GitHub Repository Setup"),
        LabSection::new("repo-setup", "1. Repository Configuration"),
        LabSection::new("secrets-setup", "2. Environment Secrets"),
        LabSection::new("part-b", "Part B: Next.js CI/CD Pipeline"),
        LabSection::new("nextjs-workflow", "1. GitHub Actions Workflow"),
        LabSection::new("trigger-workflow", "2. Trigger Your First Workflow"),
        LabSection::new("part-c", "Part C: MLOps Service CI/CD"),
        LabSection::new("mlops-workflow", "1. MLOps Workflow Overview"),
        LabSection::new("test-mlops-pipeline", "2. Test MLOps Pipeline"),
        LabSection::new("part-d", "Part D: Environment Management"),
        LabSection::new("env-strategy", "1. Environment Strategy"),
        LabSection::new("env-files", "2. Environment File Template"),
        LabSection::new("part-e", "Part E: Advanced Pipeline Features"),
        LabSection::new("branch-protection", "1. Branch Protection Rules"),
        LabSection::new("deployment-environments", "2. Deployment Environments"),
        LabSection::new("monitoring-deployments", "3. Monitoring Deployments"),
        LabSection::new("troubleshooting", "Troubleshooting"),
    ],
};
