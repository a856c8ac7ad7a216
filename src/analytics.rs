//! Analytics Events
//!
//! Named usage events with flat property maps. Where events go is up to the
//! `EventSink`; the crate ships a logging sink, an in-memory sink and a
//! no-op sink.

use std::sync::{Arc, Mutex};

use serde::Serialize;
use serde_json::{json, Map, Value};

/// Section name attached to quiz answer events
pub const QUIZ_SECTION: &str = "interactive_exercises";

/// Section name attached to slider events
pub const SLIDER_SECTION: &str = "decibel_scale";

/// A usage event
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AnalyticsEvent {
    DecibelCalculation {
        base_decibel: f64,
        compare_decibel: f64,
        energy_ratio: f64,
        decibel_difference: f64,
    },
    AnimationPlayed {
        animation_type: String,
        page: String,
    },
    QuizAnswer {
        question_id: String,
        correct: bool,
        answer: String,
        section: String,
    },
    ExtremeCalculatorUsed {
        decibel_level: f64,
        scenario: String,
        intensity_scientific: f64,
    },
    SectionViewed {
        section: String,
        page: String,
    },
    SliderInteraction {
        slider_type: String,
        value: f64,
        section: String,
    },
    NavigationClick {
        destination: String,
        source_page: String,
    },
}

impl AnalyticsEvent {
    /// Display name the event is reported under
    pub fn name(&self) -> &'static str {
        match self {
            AnalyticsEvent::DecibelCalculation { .. } => "Decibel Calculation",
            AnalyticsEvent::AnimationPlayed { .. } => "Animation Played",
            AnalyticsEvent::QuizAnswer { .. } => "Quiz Answer",
            AnalyticsEvent::ExtremeCalculatorUsed { .. } => "Extreme Calculator Used",
            AnalyticsEvent::SectionViewed { .. } => "Section Viewed",
            AnalyticsEvent::SliderInteraction { .. } => "Slider Interaction",
            AnalyticsEvent::NavigationClick { .. } => "Navigation Click",
        }
    }

    /// Event properties without the tag
    pub fn properties(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(mut map)) => {
                map.remove("event");
                map
            }
            // Unreachable for a tagged struct enum; keep the name at least
            _ => {
                let mut map = Map::new();
                map.insert("name".to_string(), json!(self.name()));
                map
            }
        }
    }
}

/// Destination for analytics events
pub trait EventSink: Send + Sync {
    fn record(&self, event: &AnalyticsEvent);
}

/// Drops every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn record(&self, _event: &AnalyticsEvent) {}
}

/// Writes events to the `log` facade at info level
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl EventSink for LogSink {
    fn record(&self, event: &AnalyticsEvent) {
        log::info!(
            target: "decibel_lab::analytics",
            "{} {}",
            event.name(),
            Value::Object(event.properties())
        );
    }
}

/// Collects events in memory
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    events: Arc<Mutex<Vec<AnalyticsEvent>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything recorded so far
    pub fn events(&self) -> Vec<AnalyticsEvent> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.events().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EventSink for MemorySink {
    fn record(&self, event: &AnalyticsEvent) {
        match self.events.lock() {
            Ok(mut events) => events.push(event.clone()),
            Err(poisoned) => poisoned.into_inner().push(event.clone()),
        }
    }
}

/// Builds events from app values and forwards them to a sink
#[derive(Clone)]
pub struct Tracker {
    sink: Arc<dyn EventSink>,
    page: String,
}

impl Tracker {
    pub fn new(sink: Arc<dyn EventSink>) -> Self {
        Self {
            sink,
            page: "/".to_string(),
        }
    }

    /// Tracker that discards everything
    pub fn disabled() -> Self {
        Self::new(Arc::new(NullSink))
    }

    /// Page path attached to page-scoped events
    pub fn with_page(mut self, page: impl Into<String>) -> Self {
        self.page = page.into();
        self
    }

    pub fn track(&self, event: AnalyticsEvent) {
        self.sink.record(&event);
    }

    pub fn track_calculation(&self, base_decibel: f64, compare_decibel: f64, energy_ratio: f64) {
        self.track(AnalyticsEvent::DecibelCalculation {
            base_decibel,
            compare_decibel,
            energy_ratio,
            decibel_difference: (compare_decibel - base_decibel).abs(),
        });
    }

    pub fn track_animation(&self, animation_type: &str) {
        self.track(AnalyticsEvent::AnimationPlayed {
            animation_type: animation_type.to_string(),
            page: self.page.clone(),
        });
    }

    pub fn track_quiz_answer(&self, question_id: u32, correct: bool, answer: &str) {
        self.track(AnalyticsEvent::QuizAnswer {
            question_id: question_id.to_string(),
            correct,
            answer: answer.to_string(),
            section: QUIZ_SECTION.to_string(),
        });
    }

    /// `intensity_scientific` is `10^((dB - 10) / 10)`, the value existing
    /// dashboards were built on; it is not an intensity in W/m².
    pub fn track_extreme_calculation(&self, decibel_level: f64, scenario: &str) {
        self.track(AnalyticsEvent::ExtremeCalculatorUsed {
            decibel_level,
            scenario: scenario.to_string(),
            intensity_scientific: 10.0_f64.powf((decibel_level - 10.0) / 10.0),
        });
    }

    pub fn track_section_view(&self, section: &str) {
        self.track(AnalyticsEvent::SectionViewed {
            section: section.to_string(),
            page: self.page.clone(),
        });
    }

    pub fn track_slider_usage(&self, slider_type: &str, value: f64) {
        self.track(AnalyticsEvent::SliderInteraction {
            slider_type: slider_type.to_string(),
            value,
            section: SLIDER_SECTION.to_string(),
        });
    }

    pub fn track_navigation_click(&self, destination: &str) {
        self.track(AnalyticsEvent::NavigationClick {
            destination: destination.to_string(),
            source_page: self.page.clone(),
        });
    }
}

impl std::fmt::Debug for Tracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tracker").field("page", &self.page).finish_non_exhaustive()
    }
}
