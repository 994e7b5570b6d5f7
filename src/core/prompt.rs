//! Persona and prompt template for advisory requests.

pub const SYSTEM_PERSONA: &str = "You are a strict agricultural science expert.";

/// Section headings the model is asked to produce, in order.
pub const SECTION_HEADERS: [&str; 7] = [
    "### 1. About the Disease",
    "### 2. Symptoms",
    "### 3. Safe & Legal Treatment Options",
    "### 4. Prevention",
    "### 5. Nutrient Requirements",
    "### 6. Fertilizer Recommendations (No Dosages)",
    "### 7. Additional Good Practices",
];

pub const CONTENT_RULES: [&str; 3] = [
    "NO dosages",
    "NO banned chemicals",
    "Fertilizers do NOT cure disease",
];

/// Fills the advisory template. `plant` and `issue` are inserted verbatim.
pub fn build_prompt(plant: &str, issue: &str) -> String {
    let [about, symptoms, treatment, prevention, nutrients, fertilizer, practices] =
        SECTION_HEADERS;
    let [no_dosages, no_banned, not_curative] = CONTENT_RULES;

    format!(
        r#"
You are an agricultural expert specializing in plant pathology, crop nutrition, and safe farm management.
Your job is to provide accurate, scientifically correct, and legally safe advice.

Plant: {plant}
Issue: {issue}

Your response MUST follow this structure clearly and must be 100% accurate:

{about}
- Explain what the disease is and identify the correct pathogen type
- Describe how it spreads

{symptoms}
- Leaves
- Stems
- Roots
- Fruit (only if applicable)
- Tubers/roots if relevant

{treatment}
- Copper-based fungicides
- Mancozeb
- Chlorothalonil
- Sulfur (if relevant)
- Biological controls
- Cultural practices

Rules:
- {no_dosages}
- {no_banned}
- {not_curative}

{prevention}
- Resistant varieties
- Crop rotation
- Spacing & airflow
- Moisture control
- Drip irrigation
- Field sanitation

{nutrients}
Explain N, P, K, Ca, Mg, S and micronutrients.

{fertilizer}
- Chemical
- Organic
- Biofertilizers

{practices}
"#
    )
}
