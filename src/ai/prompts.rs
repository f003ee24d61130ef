//! Prompt templates for the recipe-generation workflow.

/// Render the recipe-name suggestion prompt from pantry ingredient names.
pub fn render_suggest_prompt(pantry_names: &[String]) -> String {
    format!(
        "I have these ingredients in my kitchen: {}. Suggest 3 simple recipe names I could make. Respond with one name per line, nothing else.",
        pantry_names.join(", ")
    )
}

/// Render the instruction handed to the structured parse when generating a
/// recipe for a chosen dish from pantry contents.
pub fn render_generation_instruction(dish: &str, pantry_names: &[String]) -> String {
    format!(
        "Create a recipe for {} using what I already have if possible: {}",
        dish,
        pantry_names.join(", ")
    )
}

/// Render the structured-parse prompt around a free-text instruction.
pub fn render_parse_prompt(instruction: &str) -> String {
    format!(
        "Parse this recipe request into a JSON object with: title, description, servings (number), ingredients (array of {{name, amount, unit}}), and steps (array of strings). Respond with JSON only, no other text. Request: {instruction}"
    )
}

/// Render the food-photography prompt for a recipe title.
pub fn render_image_prompt(title: &str) -> String {
    format!(
        "High quality, appetizing food photography of: {title}. Professional lighting, top-down view."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggest_prompt_lists_ingredients() {
        let prompt = render_suggest_prompt(&[
            "Flour".to_string(),
            "Eggs".to_string(),
            "Tomato sauce".to_string(),
        ]);
        assert!(prompt.contains("Flour, Eggs, Tomato sauce"));
        assert!(prompt.contains("one name per line"));
    }

    #[test]
    fn parse_prompt_names_the_schema_fields() {
        let prompt = render_parse_prompt("Create a recipe for Shakshuka");
        assert!(prompt.contains("title"));
        assert!(prompt.contains("servings"));
        assert!(prompt.contains("Shakshuka"));
    }

    #[test]
    fn generation_instruction_names_dish_and_pantry() {
        let instruction =
            render_generation_instruction("Shakshuka", &["Eggs".to_string(), "Tomato sauce".to_string()]);
        assert!(instruction.contains("Shakshuka"));
        assert!(instruction.contains("Eggs, Tomato sauce"));
    }

    #[test]
    fn image_prompt_styles_the_shot() {
        let prompt = render_image_prompt("Shakshuka");
        assert!(prompt.contains("Shakshuka"));
        assert!(prompt.contains("food photography"));
    }
}
