//! Prompt templates for every generation operation
//!
//! The copy here is the product: it sets the register of everything the
//! artisan sees. Editors should treat wording changes as behavior changes.

pub fn story_prompt(craft_type: &str, focus: &str) -> String {
    format!(
        r#"Create a compelling narrative story for a {craft_type} artisan.

Focus area: {focus}

Generate a story that:
- Highlights the cultural heritage and traditional techniques
- Shows the artisan's passion and dedication
- Appeals to customers who value authentic craftsmanship
- Is engaging and emotionally resonant
- Is 2-3 paragraphs long

Respond with JSON in this format:
{{
    "title": "An engaging title for the story",
    "content": "The complete story content"
}}"#
    )
}

pub const IMAGE_PROMPT: &str = r#"Analyze this artisan product image and generate:
1. A detailed description of the item, its craftsmanship, and visual appeal
2. Compelling marketing copy that would attract customers to purchase this handmade item

Focus on:
- The quality and uniqueness of the craftsmanship
- Materials and techniques visible in the image
- Emotional appeal and storytelling elements
- Value proposition for potential buyers

Respond with JSON in this format:
{
    "description": "Detailed description of the item and its craftsmanship",
    "marketingCopy": "Compelling marketing copy for selling this item"
}"#;

pub fn social_prompt(platform: &str, content: &str, craft_type: &str) -> String {
    format!(
        r#"Optimize this social media content for {platform}:

Content: {content}
Craft Type: {craft_type}

Create optimized content that:
- Is tailored for {platform}'s audience and format
- Includes relevant hashtags for maximum reach
- Has an engaging caption that drives engagement
- Appeals to people interested in handmade/artisan products
- Follows {platform} best practices

Respond with JSON in this format:
{{
    "optimizedContent": "The optimized content",
    "hashtags": ["hashtag1", "hashtag2", "hashtag3"],
    "caption": "An engaging caption for the post"
}}"#
    )
}

pub fn product_prompt(product_name: &str, description: &str, platform: &str) -> String {
    format!(
        r#"Optimize this product listing for {platform}:

Product Name: {product_name}
Description: {description}
Platform: {platform}

Create an optimized listing that:
- Has an SEO-friendly title that will rank well on {platform}
- Includes relevant keywords for search visibility
- Appeals to customers looking for handmade/artisan products
- Follows {platform}'s listing best practices
- Highlights the unique value and craftsmanship

Respond with JSON in this format:
{{
    "optimizedTitle": "SEO-optimized product title",
    "optimizedDescription": "Compelling product description",
    "keywords": ["keyword1", "keyword2", "keyword3"]
}}"#
    )
}

pub fn heritage_prompt(technique: &str, cultural_context: &str) -> String {
    format!(
        r#"Create a detailed heritage story about this traditional craft technique:

Technique/Tradition: {technique}
Cultural Context: {cultural_context}

Generate a story that:
- Explains the historical significance and origins
- Describes the traditional techniques and methods
- Highlights the cultural importance and meaning
- Shows how this tradition is being preserved today
- Is educational yet engaging for modern audiences
- Is 2-3 paragraphs long

Focus on authenticity and respect for the cultural heritage."#
    )
}

pub fn statement_prompt(
    artist_journey: &str,
    inspiration: Option<&str>,
    philosophy: Option<&str>,
) -> String {
    let mut details = format!("Artist Journey: {artist_journey}\n");
    if let Some(inspiration) = inspiration {
        details.push_str(&format!("Inspiration: {inspiration}\n"));
    }
    if let Some(philosophy) = philosophy {
        details.push_str(&format!("Philosophy: {philosophy}\n"));
    }

    format!(
        r#"Create a professional artist statement based on this information:

{details}
Generate an artist statement that:
- Is professional and compelling
- Reflects the artist's unique voice and perspective
- Explains their artistic process and approach
- Connects their personal journey to their craft
- Appeals to collectors, galleries, and art enthusiasts
- Is concise but meaningful (2-3 paragraphs)

The statement should be suitable for portfolios, exhibitions, and professional presentations."#
    )
}

pub fn trends_prompt(craft_type: &str) -> String {
    format!(
        r#"Analyze current market trends for {craft_type} products:

Provide insights on:
- Current demand trends and growth patterns
- Average pricing for handmade {craft_type} items
- Trending keywords and search terms
- Market opportunities for artisans

Base your analysis on general market knowledge and trends in the handmade/artisan marketplace.

Respond with JSON in this format:
{{
    "demandIncrease": 25,
    "avgPrice": 45,
    "keywords": ["sustainable", "handmade", "artisan"]
}}"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_story_prompt_embeds_inputs() {
        let prompt = story_prompt("Pottery", "family tradition");
        assert!(prompt.contains("Pottery artisan"));
        assert!(prompt.contains("Focus area: family tradition"));
        assert!(prompt.contains("Respond with JSON"));
    }

    #[test]
    fn test_statement_prompt_optional_sections() {
        let bare = statement_prompt("Started at my grandmother's wheel", None, None);
        assert!(bare.contains("Artist Journey: Started at my grandmother's wheel"));
        assert!(!bare.contains("Inspiration:"));
        assert!(!bare.contains("Philosophy:"));

        let full = statement_prompt("journey", Some("rivers"), Some("wabi-sabi"));
        assert!(full.contains("Inspiration: rivers"));
        assert!(full.contains("Philosophy: wabi-sabi"));
    }

    #[test]
    fn test_trends_prompt_embeds_craft() {
        let prompt = trends_prompt("Weaving");
        assert!(prompt.contains("market trends for Weaving products"));
        assert!(prompt.contains("handmade Weaving items"));
    }
}
