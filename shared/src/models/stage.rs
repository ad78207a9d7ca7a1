use serde::{Deserialize, Serialize};
use crate::error::{Result, SharedError};

/// Cognitive impairment stage, ordered by the classifier's label index.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum StageClass {
    MildDemented,
    ModerateDemented,
    NonDemented,
    VeryMildDemented,
}

impl StageClass {
    pub const ALL: [StageClass; 4] = [
        StageClass::MildDemented,
        StageClass::ModerateDemented,
        StageClass::NonDemented,
        StageClass::VeryMildDemented,
    ];

    pub fn from_label_index(index: u8) -> Result<Self> {
        Self::ALL
            .get(index as usize)
            .copied()
            .ok_or_else(|| SharedError::UnknownStage(index.to_string()))
    }

    pub fn from_prediction_label(label: &str) -> Result<Self> {
        let wanted = label.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|class| class.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SharedError::UnknownStage(label.to_string()))
    }

    /// Display label as emitted by the classifier.
    pub fn label(&self) -> &'static str {
        match self {
            StageClass::MildDemented => "Mild Demented",
            StageClass::ModerateDemented => "Moderate Demented",
            StageClass::NonDemented => "Non Demented",
            StageClass::VeryMildDemented => "Very Mild Demented",
        }
    }
}

/// One informational card describing a stage
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InformationalRecord {
    pub class: StageClass,
    pub title: String,
    pub short_description: String,
    pub symptoms: Vec<String>,
    pub suggestions: Vec<String>,
    pub future_precautions: Vec<String>,
}

impl InformationalRecord {
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(SharedError::Configuration(format!(
                "record for {} has an empty title",
                self.class.label()
            )));
        }
        if self.short_description.trim().is_empty() {
            return Err(SharedError::Configuration(format!(
                "record '{}' has an empty description",
                self.title
            )));
        }
        let lists = [
            ("symptoms", &self.symptoms),
            ("suggestions", &self.suggestions),
            ("future precautions", &self.future_precautions),
        ];
        for (name, items) in lists {
            if items.is_empty() {
                return Err(SharedError::Configuration(format!(
                    "record '{}' has no {}",
                    self.title, name
                )));
            }
        }
        Ok(())
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The built-in stage cards shown on the analytics page.
pub fn reference_records() -> Vec<InformationalRecord> {
    vec![
        InformationalRecord {
            class: StageClass::NonDemented,
            title: "Non-Demented (No Cognitive Impairment)".to_string(),
            short_description: "Individuals classified as Non-Demented show no signs of cognitive decline and can perform daily activities without any issues. Their memory, reasoning, and judgment are intact.".to_string(),
            symptoms: strings(&[
                "No significant memory loss",
                "Normal reasoning and problem-solving skills",
                "Unimpaired ability to carry out daily activities",
            ]),
            suggestions: strings(&[
                "Maintain a healthy lifestyle through a balanced diet, regular exercise, and mental stimulation.",
                "Engage in social activities to enhance cognitive function.",
                "Regular check-ups with healthcare providers to monitor overall health and cognitive status.",
            ]),
            future_precautions: strings(&[
                "Continue engaging in cognitive activities such as reading, puzzles, and learning new skills.",
                "Monitor for any early signs of cognitive decline and consult a doctor if concerns arise.",
                "Stay informed about Alzheimer's and related conditions for early detection and intervention.",
            ]),
        },
        InformationalRecord {
            class: StageClass::VeryMildDemented,
            title: "Very Mild Demented (Early Stage Alzheimer's)".to_string(),
            short_description: "Very Mild Demented individuals may experience slight cognitive difficulties that are often mistaken for normal aging. These mild symptoms do not significantly impact their daily lives.".to_string(),
            symptoms: strings(&[
                "Mild memory loss, especially of recent events",
                "Slight difficulties with complex tasks and problem-solving",
                "Occasionally losing things or forgetting words",
            ]),
            suggestions: strings(&[
                "Establish and stick to a daily routine to minimize confusion.",
                "Use memory aids like calendars, notes, and alarms.",
                "Engage in physical and mental activities to slow cognitive decline.",
            ]),
            future_precautions: strings(&[
                "Regularly consult with a healthcare provider to monitor progression.",
                "Plan for future care needs, including legal and financial planning.",
                "Stay socially active and involved in community activities.",
            ]),
        },
        InformationalRecord {
            class: StageClass::MildDemented,
            title: "Mild Demented (Middle Stage Alzheimer's)".to_string(),
            short_description: "Mild Demented individuals show noticeable cognitive decline that affects daily functioning. They may require some assistance with everyday activities.".to_string(),
            symptoms: strings(&[
                "Noticeable memory loss, especially regarding recent events and personal history",
                "Difficulty performing familiar tasks and managing personal affairs",
                "Increased confusion and disorientation, especially in unfamiliar environments",
                "Changes in personality and behavior, such as irritability or depression",
            ]),
            suggestions: strings(&[
                "Provide structured routines and clear instructions to reduce confusion.",
                "Simplify tasks and offer assistance with daily activities as needed.",
                "Encourage physical exercise and cognitive activities tailored to the individual's abilities.",
            ]),
            future_precautions: strings(&[
                "Discuss and plan for long-term care needs, considering home care or assisted living options.",
                "Ensure the individual’s safety by making necessary home modifications.",
                "Educate family and caregivers about the disease progression and coping strategies.",
            ]),
        },
        InformationalRecord {
            class: StageClass::ModerateDemented,
            title: "Moderate Demented (Late Stage Alzheimer's)".to_string(),
            short_description: "Moderate Demented individuals experience significant cognitive decline, with severe memory loss and impaired ability to communicate and perform daily activities. They require substantial assistance and care.".to_string(),
            symptoms: strings(&[
                "Severe memory loss, including forgetting close family members",
                "Inability to perform basic daily activities without assistance",
                "Significant language impairment and difficulty in communication",
                "Behavioral changes, including aggression, anxiety, and wandering",
            ]),
            suggestions: strings(&[
                "Provide constant supervision and assistance with daily activities, including personal hygiene and feeding.",
                "Create a calm and safe environment to reduce anxiety and prevent wandering.",
                "Use simple and clear communication techniques, and maintain a reassuring presence.",
            ]),
            future_precautions: strings(&[
                "Consider full-time professional care, either at home or in a specialized facility.",
                "Ensure all legal and financial matters are settled, including advanced directives and power of attorney.",
                "Continue to educate caregivers on handling the physical and emotional challenges of advanced Alzheimer's.",
            ]),
        },
    ]
}
