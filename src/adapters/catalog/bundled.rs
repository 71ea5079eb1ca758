//! Bundled script catalog.
//!
//! A compiled-in starter pack so the app is useful before the hosted
//! library is reachable (fresh install, offline, empty tables). Copy events
//! are counted locally; popularity ordering works the same way it does
//! against the hosted catalog.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{ScriptId, UserId};
use crate::domain::script::{Objection, Script, ScriptCategory};
use crate::ports::{ScriptCatalog, ScriptCatalogError, ScriptFilter};

/// Script catalog backed by the compiled-in starter pack.
#[derive(Clone)]
pub struct BundledScriptCatalog {
    scripts: Arc<Vec<Script>>,
    objections: Arc<Vec<Objection>>,
    copy_counts: Arc<RwLock<HashMap<ScriptId, u32>>>,
}

impl BundledScriptCatalog {
    /// Create a catalog with the starter pack.
    pub fn new() -> Self {
        Self {
            scripts: Arc::new(starter_scripts()),
            objections: Arc::new(starter_objections()),
            copy_counts: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Local copy count for a script (starter pack ships with zeroes).
    pub async fn copy_count(&self, script_id: &ScriptId) -> u32 {
        self.copy_counts
            .read()
            .await
            .get(script_id)
            .copied()
            .unwrap_or(0)
    }
}

impl Default for BundledScriptCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ScriptCatalog for BundledScriptCatalog {
    async fn list_scripts(&self, filter: &ScriptFilter) -> Result<Vec<Script>, ScriptCatalogError> {
        let counts = self.copy_counts.read().await;
        let mut scripts: Vec<Script> = self
            .scripts
            .iter()
            .filter(|s| filter.accepts(s))
            .cloned()
            .map(|mut s| {
                s.copied_count += counts.get(&s.id).copied().unwrap_or(0);
                s
            })
            .collect();
        scripts.sort_by(|a, b| b.copied_count.cmp(&a.copied_count));
        Ok(scripts)
    }

    async fn search_objections(
        &self,
        term: Option<&str>,
    ) -> Result<Vec<Objection>, ScriptCatalogError> {
        Ok(self
            .objections
            .iter()
            .filter(|o| term.map(|t| o.matches(t)).unwrap_or(true))
            .cloned()
            .collect())
    }

    async fn record_copy(
        &self,
        script_id: &ScriptId,
        _user_id: Option<&UserId>,
        _final_text: Option<&str>,
    ) -> Result<(), ScriptCatalogError> {
        let mut counts = self.copy_counts.write().await;
        *counts.entry(script_id.clone()).or_insert(0) += 1;
        Ok(())
    }
}

fn script(
    id: &str,
    title: &str,
    content: &str,
    category: ScriptCategory,
    company: &str,
    tone: &str,
    tags: &[&str],
) -> Script {
    Script {
        // Starter ids are static literals and always non-empty.
        id: ScriptId::new(id).expect("starter script id is non-empty"),
        title: title.to_string(),
        content: content.to_string(),
        category,
        company: company.to_string(),
        tone: Some(tone.to_string()),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        copied_count: 0,
    }
}

fn starter_scripts() -> Vec<Script> {
    vec![
        script(
            "starter-opener-01",
            "Warm market opener",
            "Hey [Name]! I came across something that could be a great fit for you. \
             Do you have 5 minutes this week?",
            ScriptCategory::Opener,
            "GENERAL",
            "casual",
            &["warm", "opener"],
        ),
        script(
            "starter-followup-01",
            "Follow-up after presentation",
            "Hey [Name], I wanted to check in on how our conversation landed with you. \
             Any questions I can answer?",
            ScriptCategory::Followup,
            "GENERAL",
            "professional",
            &["followup", "soft"],
        ),
        script(
            "starter-objection-01",
            "Objection: no time",
            "Totally understand! That is exactly why this could be interesting for you, \
             it is about buying back your time. When could you spare 10 minutes?",
            ScriptCategory::Objection,
            "GENERAL",
            "empathetic",
            &["objection", "time"],
        ),
        script(
            "starter-opener-02",
            "Balance test pitch",
            "Did you know most people have an omega imbalance? The test shows your level \
             in 15 seconds. Want to see how it works, [Name]?",
            ScriptCategory::Opener,
            "Zinzino",
            "informative",
            &["test", "health"],
        ),
        script(
            "starter-opener-03",
            "Aloe vera intro",
            "Hey [Name]! I have been drinking the aloe vera gel for 3 months and my \
             energy is way up. Do you know the product?",
            ScriptCategory::Opener,
            "LR",
            "personal",
            &["aloe", "product"],
        ),
        script(
            "starter-closing-01",
            "Soft close",
            "Based on everything you told me, [Name], I really think this fits you. \
             What is still holding you back from starting today?",
            ScriptCategory::Closing,
            "GENERAL",
            "confident",
            &["closing", "soft"],
        ),
    ]
}

fn objection(
    id: &str,
    objection: &str,
    response: &str,
    technique: &str,
    when_to_use: &str,
) -> Objection {
    Objection {
        id: ScriptId::new(id).expect("starter objection id is non-empty"),
        objection: objection.to_string(),
        response: response.to_string(),
        technique: Some(technique.to_string()),
        when_to_use: Some(when_to_use.to_string()),
        tone: None,
        success_rate: None,
    }
}

fn starter_objections() -> Vec<Objection> {
    vec![
        objection(
            "starter-obj-01",
            "I have no time",
            "Totally understand! That is exactly why this could be interesting, it is \
             about buying back your time. When could you spare 10 minutes for a quick call?",
            "Reframe",
            "When the prospect names lack of time as the reason",
        ),
        objection(
            "starter-obj-02",
            "It is too expensive",
            "I get that you watch your budget. Let me ask: what would it be worth to you \
             to reach [Goal]? Sometimes the question is not whether you can afford it, \
             but whether you can afford not to.",
            "Value question",
            "Price objections",
        ),
        objection(
            "starter-obj-03",
            "I need to think about it",
            "Absolutely, this is an important decision. Suppose you slept on it, what \
             would need to be true tomorrow morning for you to say yes?",
            "Isolate",
            "When the prospect needs time to think",
        ),
        objection(
            "starter-obj-04",
            "My partner has to decide",
            "Great that you involve your partner, that shows respect. When could the two \
             of you talk with me together? That way I can answer every question directly.",
            "Set appointment",
            "Partner objections",
        ),
        objection(
            "starter-obj-05",
            "Is this a pyramid scheme?",
            "Good question! Pyramid schemes are illegal, there is no real product behind \
             them. Here you earn through product sales and team building, and anyone can \
             out-earn their sponsor.",
            "Educate",
            "When the prospect is skeptical about the business model",
        ),
        objection(
            "starter-obj-06",
            "I do not know anyone",
            "I thought the same at the start! We show you exactly how to build new \
             contacts online. Your circle is only the starting point, not the limit.",
            "Perspective shift",
            "Contact-list objections",
        ),
    ]
}
