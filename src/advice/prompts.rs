//! Prompt templates for the advice generation service

const LEARNING_PATH_TEMPLATE: &str = r#"You are a career development and skills expert. Generate a CONCISE and ACTIONABLE learning path for someone who wants to improve their {skill} skills from level {current_level} to level {target_level}.

IMPORTANT: Be specific and practical. Focus on the most effective resources and steps.

Provide the following in a JSON format:
1. current_level_desc: 1-2 sentences about what level {current_level} means for {skill}
2. target_level_desc: 1-2 sentences about what level {target_level} means for {skill}
3. learning_path: 3-5 key milestones (be specific and time-bound)
4. resources: 2-3 high-quality resources (include type, title, and direct URL)
5. time_commitment: Realistic time estimate (e.g., "2-3 hours per week for 8 weeks")
6. projects: 1-2 practical projects to apply the skill

Example format (you must use this exact structure):
{
    "skill": "{skill}",
    "current_level": {current_level},
    "target_level": {target_level},
    "current_level_desc": "...",
    "target_level_desc": "...",
    "learning_path": ["Milestone 1", "Milestone 2"],
    "resources": [
        {"type": "Course", "title": "...", "url": "..."},
        {"type": "Book", "title": "...", "url": "..."}
    ],
    "time_commitment": "...",
    "projects": ["Project 1", "Project 2"]
}

IMPORTANT: Only return the JSON object, nothing else. No markdown formatting or additional text."#;

const IMPROVEMENT_TIPS_TEMPLATE: &str = r#"Provide 3-5 SPECIFIC and ACTIONABLE tips for someone at level {current_level} in {skill} to improve to level {target_level}.

For each tip, be CONCISE but specific enough that someone could immediately act on it. Focus on practical, concrete actions rather than general advice.

Format the response as a JSON object with this exact structure:
{
    "skill": "{skill}",
    "current_level": {current_level},
    "target_level": {target_level},
    "tips": [
        "Specific action 1 with clear steps",
        "Specific action 2 with clear steps",
        "Specific action 3 with clear steps"
    ]
}

Only return the JSON object, nothing else. No markdown formatting or additional text."#;

pub fn render_learning_path(skill: &str, current_level: u8, target_level: u8) -> String {
    LEARNING_PATH_TEMPLATE
        .replace("{skill}", skill)
        .replace("{current_level}", &current_level.to_string())
        .replace("{target_level}", &target_level.to_string())
}

pub fn render_improvement_tips(skill: &str, current_level: u8) -> String {
    IMPROVEMENT_TIPS_TEMPLATE
        .replace("{skill}", skill)
        .replace("{current_level}", &current_level.to_string())
        .replace("{target_level}", &(current_level + 1).to_string())
}
