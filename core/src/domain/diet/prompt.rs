/// Builds the instruction sent to the generator for the given symptoms.
pub fn build_diet_prompt(symptoms: &str) -> String {
    format!(
        "I am building a diet assistant chatbot. The user has reported the following symptom(s): \"{symptoms}\".\n\
         Based on these symptoms, suggest a simple, healthy, and practical daily diet plan.\n\
         Keep it clear, concise, and beginner-friendly, just give me the diet plan, don't say unnecessary stuff, and don't give asterisk."
    )
}
