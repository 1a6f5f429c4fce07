use regex::Regex;

use crate::domain::common::entities::app_errors::CoreError;

/// Symptom and condition vocabulary gating access to the generator.
pub const MEDICAL_KEYWORDS: &[&str] = &[
    // General symptoms
    "pain",
    "headache",
    "nausea",
    "vomiting",
    "fever",
    "cough",
    "cold",
    "fatigue",
    "dizziness",
    "sore throat",
    "body ache",
    "bloating",
    "indigestion",
    "diarrhea",
    "constipation",
    "acidity",
    "heartburn",
    "loss of appetite",
    "shortness of breath",
    "difficulty breathing",
    "sweating",
    "palpitations",
    "swelling",
    "weakness",
    "cramps",
    "inflammation",
    "burning sensation",
    // Chronic diseases
    "diabetes",
    "hypertension",
    "high blood pressure",
    "low blood pressure",
    "cholesterol",
    "obesity",
    "asthma",
    "thyroid",
    "hypothyroidism",
    "hyperthyroidism",
    "anemia",
    "pcos",
    "pcod",
    "arthritis",
    "osteoporosis",
    "migraine",
    "epilepsy",
    "eczema",
    "psoriasis",
    "ulcer",
    "gastritis",
    "gerd",
    "ibs",
    "irritable bowel",
    "colitis",
    "gout",
    "liver disease",
    "hepatitis",
    "kidney stones",
    // Metabolic & hormonal
    "insulin",
    "hormonal imbalance",
    "metabolic syndrome",
    "cortisol",
    "testosterone",
    "estrogen",
    "menopause",
    "thyroxine",
    "androgen",
    "progesterone",
    // Organ-specific
    "stomach",
    "liver",
    "kidney",
    "pancreas",
    "lungs",
    "skin",
    "gut",
    "intestine",
    "colon",
    "gallbladder",
    "prostate",
    "heart",
    // Women's health
    "period",
    "menstrual",
    "menstruation",
    "irregular periods",
    "pcos",
    "pcod",
    "menopause",
    "pregnancy",
    "fertility",
    "fibroids",
    "endometriosis",
    // Nutritional conditions
    "malnutrition",
    "vitamin d deficiency",
    "calcium deficiency",
    "iron deficiency",
    "protein deficiency",
    "b12 deficiency",
    "overweight",
    "underweight",
    // Infections
    "infection",
    "viral",
    "bacterial",
    "fungal",
    "flu",
    "covid",
    "allergy",
    "sinusitis",
    "bronchitis",
    "urinary tract infection",
    "uti",
    "cold sore",
    // Lifestyle-related
    "stress",
    "sleep",
    "insomnia",
    "sedentary",
    "alcohol",
    "smoking",
    "junk food",
    "fast food",
    "lack of exercise",
];

#[derive(Debug, Clone)]
struct Keyword {
    term: String,
    pattern: Regex,
}

/// Ordered, immutable set of terms matched on word boundaries.
#[derive(Debug, Clone)]
pub struct KeywordSet {
    keywords: Vec<Keyword>,
}

impl KeywordSet {
    pub fn new<I, S>(terms: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords = terms
            .into_iter()
            .map(|term| {
                let term = term.as_ref().to_lowercase();
                let pattern = Regex::new(&format!(r"\b{}\b", regex::escape(&term))).map_err(
                    |e| CoreError::InvalidKeyword {
                        keyword: term.clone(),
                        reason: e.to_string(),
                    },
                )?;

                Ok::<_, CoreError>(Keyword { term, pattern })
            })
            .collect::<Result<Vec<_>, CoreError>>()?;

        Ok(Self { keywords })
    }

    pub fn medical() -> Result<Self, CoreError> {
        Self::new(MEDICAL_KEYWORDS)
    }

    /// First term, in list order, occurring as a whole word or phrase.
    pub fn matched_keyword(&self, text: &str) -> Option<&str> {
        if text.is_empty() {
            return None;
        }

        let text_lower = text.to_lowercase();
        self.keywords
            .iter()
            .find(|keyword| keyword.pattern.is_match(&text_lower))
            .map(|keyword| keyword.term.as_str())
    }

    pub fn is_medical_related(&self, text: &str) -> bool {
        self.matched_keyword(text).is_some()
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(|keyword| keyword.term.as_str())
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}
