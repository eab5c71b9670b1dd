//! Keyword routing for the logistics assistant chat.
//!
//! Questions are matched against a short keyword list per intent, in a fixed
//! order, and answered from a canned briefing.

use serde::{Deserialize, Serialize};
use serde_json::{Value as JsonValue, json};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatIntent {
    Prediction,
    CostOptimization,
    Alert,
    RouteAnalysis,
    General,
}

/// Annotation shown next to a reply.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Prediction,
    Optimization,
    Alert,
    Analysis,
}

impl ChatIntent {
    const ROUTED: [ChatIntent; 4] = [
        ChatIntent::Prediction,
        ChatIntent::CostOptimization,
        ChatIntent::Alert,
        ChatIntent::RouteAnalysis,
    ];

    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            ChatIntent::Prediction => &["predict", "forecast"],
            ChatIntent::CostOptimization => &["cost", "optimization"],
            ChatIntent::Alert => &["alert", "problem", "issue"],
            ChatIntent::RouteAnalysis => &["route", "path"],
            ChatIntent::General => &[],
        }
    }

    pub fn insight_kind(&self) -> Option<InsightKind> {
        match self {
            ChatIntent::Prediction => Some(InsightKind::Prediction),
            ChatIntent::CostOptimization => Some(InsightKind::Optimization),
            ChatIntent::Alert => Some(InsightKind::Alert),
            ChatIntent::RouteAnalysis => Some(InsightKind::Analysis),
            ChatIntent::General => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    pub intent: ChatIntent,
    pub kind: Option<InsightKind>,
    pub content: String,
    /// Figures backing the annotation (confidence, savings, alert counts, ...).
    pub data: JsonValue,
}

pub fn route_question(question: &str) -> ChatIntent {
    let lower = question.to_lowercase();
    ChatIntent::ROUTED
        .into_iter()
        .find(|intent| intent.keywords().iter().any(|kw| lower.contains(kw)))
        .unwrap_or(ChatIntent::General)
}

pub fn reply_to(question: &str) -> ChatReply {
    let intent = route_question(question);
    tracing::debug!(?intent, "routed chat question");

    let (content, data) = match intent {
        ChatIntent::Prediction => (
            "Based on current traffic patterns and historical data, I predict:\n\n\
             • Santos-São Paulo route: 18% increase in delivery time next week\n\
             • Callao-Lima corridor: Optimal conditions, on-time delivery expected\n\
             • Mexico City routes: Weather delays likely on Thursday-Friday\n\n\
             Would you like me to suggest alternative routes or rescheduling options?"
                .to_string(),
            json!({ "confidence": 94, "timeframe": "7 days" }),
        ),
        ChatIntent::CostOptimization => (
            "I've analyzed your logistics costs for this month:\n\n\
             • Fuel optimization could save $127K (12% reduction)\n\
             • Route consolidation opportunities: 23 routes\n\
             • Modal shift recommendations: 15% of cargo to rail\n\
             • Peak hour avoidance could reduce costs by 8%\n\n\
             Implementing these changes could reduce monthly logistics costs by $284K. \
             Should I create an implementation plan?"
                .to_string(),
            json!({ "savings": 284_000, "confidence": 89 }),
        ),
        ChatIntent::Alert => (
            "Here are the current critical alerts:\n\n\
             • [critical] Port congestion in Callao: 4-6 hour delays expected\n\
             • [warning] Weather system affecting Bogotá routes: Minor delays\n\
             • [critical] Strike announced at São Paulo distribution center: 48h impact\n\
             • [warning] Fuel price spike in Mexico: 7% cost increase\n\n\
             I recommend rerouting 40% of Callao shipments through Paita port. \
             Would you like me to calculate the impact?"
                .to_string(),
            json!({ "criticalAlerts": 2, "warnings": 2 }),
        ),
        ChatIntent::RouteAnalysis => (
            "Analyzing optimal routes for your shipments:\n\n\
             • Fastest route: Santos → São Paulo via BR-116 (4.2h)\n\
             • Most efficient: Santos → São Paulo via SP-160 + BR-381 (4.8h, 15% fuel savings)\n\
             • Recommended: Hybrid route avoiding peak hours (4.5h, balanced)\n\n\
             Real-time traffic shows BR-116 has an accident at km 45. \
             I suggest the SP-160 route. Current ETA: 17:30."
                .to_string(),
            json!({ "routeOptions": 3, "timeSaved": "1.5h" }),
        ),
        ChatIntent::General => (
            format!(
                "I understand you're asking about \"{question}\". I can help you with:\n\n\
                 • Predictive analytics for delivery times\n\
                 • Cost optimization strategies\n\
                 • Route planning and traffic analysis\n\
                 • Real-time alerts and issue resolution\n\
                 • Supply chain performance metrics\n\
                 • Regional market insights\n\n\
                 What specific aspect would you like me to analyze for you?"
            ),
            JsonValue::Null,
        ),
    };

    ChatReply {
        intent,
        kind: intent.insight_kind(),
        content,
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_by_keyword() {
        assert_eq!(route_question("Predict delivery times for next week"), ChatIntent::Prediction);
        assert_eq!(
            route_question("Show me cost optimization opportunities"),
            ChatIntent::CostOptimization
        );
        assert_eq!(route_question("What are the current ALERTS?"), ChatIntent::Alert);
        assert_eq!(route_question("Best path to Lima"), ChatIntent::RouteAnalysis);
        assert_eq!(
            route_question("Analyze my Brazil-Argentina corridor performance"),
            ChatIntent::General
        );
    }

    #[test]
    fn earlier_intent_wins() {
        // "forecast" outranks "route"
        assert_eq!(route_question("forecast the route delays"), ChatIntent::Prediction);
        // "cost" outranks "issue"
        assert_eq!(route_question("fuel cost issue"), ChatIntent::CostOptimization);
    }

    #[test]
    fn reply_carries_kind_and_data() {
        let reply = reply_to("any problem in Callao?");
        assert_eq!(reply.intent, ChatIntent::Alert);
        assert_eq!(reply.kind, Some(InsightKind::Alert));
        assert_eq!(reply.data["criticalAlerts"], 2);
        assert!(reply.content.contains("Paita"));
    }

    #[test]
    fn general_reply_echoes_question_without_annotation() {
        let reply = reply_to("hello there");
        assert_eq!(reply.intent, ChatIntent::General);
        assert_eq!(reply.kind, None);
        assert!(reply.data.is_null());
        assert!(reply.content.contains("\"hello there\""));
    }
}
