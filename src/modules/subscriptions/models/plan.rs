//! Subscription plan configuration.
//!
//! Plans are code-configured: the catalog is built once at startup with the
//! builder and read everywhere else. Limits use `None` for unlimited.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

/// A single subscription plan with its quota limits and feature set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanConfig {
    pub id: String,
    /// Human-readable plan name shown in the account screen
    pub name: String,
    /// Documents (invoices + quotations) per calendar month; `None` = unlimited
    pub monthly_documents: Option<u32>,
    /// Client records; `None` = unlimited
    pub clients: Option<u32>,
    /// Feature flags unlocked by this plan
    pub features: HashSet<String>,
}

impl PlanConfig {
    pub fn has_feature(&self, feature: &str) -> bool {
        self.features.contains(feature)
    }
}

/// A collection of plan configurations, keyed by plan id.
#[derive(Debug, Clone, Default)]
pub struct Plans {
    plans: HashMap<String, PlanConfig>,
}

impl Plans {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for constructing plans.
    pub fn builder() -> PlansBuilder {
        PlansBuilder::new()
    }

    /// The catalog the application ships with.
    pub fn default_catalog() -> Self {
        Self::builder()
            .plan("free")
            .name("Free")
            .monthly_documents(5)
            .clients(3)
            .done()
            .plan("pro")
            .name("Pro")
            .monthly_documents(100)
            .features(["custom_branding", "excel_export"])
            .done()
            .plan("business")
            .name("Business")
            .features(["custom_branding", "excel_export", "priority_support"])
            .done()
            .build()
    }

    /// Add a single plan config.
    pub fn add(&mut self, config: PlanConfig) {
        self.plans.insert(config.id.clone(), config);
    }

    /// Get a plan by ID.
    pub fn get(&self, plan_id: &str) -> Option<&PlanConfig> {
        self.plans.get(plan_id)
    }

    /// Check if a plan exists.
    pub fn contains(&self, plan_id: &str) -> bool {
        self.plans.contains_key(plan_id)
    }

    /// Get all plan IDs.
    pub fn plan_ids(&self) -> Vec<&str> {
        self.plans.keys().map(|s| s.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}

/// Builder for a [`Plans`] collection.
#[derive(Debug, Default)]
pub struct PlansBuilder {
    plans: Vec<PlanConfig>,
}

impl PlansBuilder {
    fn new() -> Self {
        Self::default()
    }

    /// Start configuring a plan; finish it with [`PlanBuilder::done`].
    pub fn plan(self, id: impl Into<String>) -> PlanBuilder {
        let id = id.into();
        PlanBuilder {
            parent: self,
            config: PlanConfig {
                name: id.clone(),
                id,
                monthly_documents: None,
                clients: None,
                features: HashSet::new(),
            },
        }
    }

    pub fn build(self) -> Plans {
        let mut plans = Plans::new();
        for config in self.plans {
            plans.add(config);
        }
        plans
    }
}

/// Builder for a single plan within a [`PlansBuilder`] chain.
#[derive(Debug)]
pub struct PlanBuilder {
    parent: PlansBuilder,
    config: PlanConfig,
}

impl PlanBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.config.name = name.into();
        self
    }

    pub fn monthly_documents(mut self, limit: u32) -> Self {
        self.config.monthly_documents = Some(limit);
        self
    }

    pub fn clients(mut self, limit: u32) -> Self {
        self.config.clients = Some(limit);
        self
    }

    pub fn features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.features = features.into_iter().map(Into::into).collect();
        self
    }

    /// Finish this plan and return to the collection builder.
    pub fn done(self) -> PlansBuilder {
        let mut parent = self.parent;
        parent.plans.push(self.config);
        parent
    }
}
