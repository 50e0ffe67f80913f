/// Video title ideas, description and script outline for a prompt.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YouTubeCopy {
    pub title_options: Vec<String>,
    pub thumbnail_idea: String,
    pub seo_keywords: String,
    pub description: String,
    pub script_outline: String,
    pub hash_tags: String,
    pub voice_transcript_hook: String,
}

impl YouTubeCopy {
    pub fn for_prompt(prompt: &str) -> Self {
        let compact: String = prompt.split(' ').collect();
        let first_word = prompt.split(' ').next().unwrap_or_default();

        Self {
            title_options: vec![
                format!("🚀 {prompt}: The Ultimate 2025 Guide"),
                format!("🤔 Is {prompt} Worth It? An Honest Review"),
                format!("5 Mind-Blowing Things You Can Do With {prompt}"),
            ],
            thumbnail_idea: format!(
                "A split-screen image. Left side: A high-contrast, intriguing graphic related to \"{prompt}\". \
Right side: A person with a surprised or thoughtful expression. Big, bold text: \"{}?!\"",
                prompt.to_uppercase()
            ),
            seo_keywords: format!(
                "{prompt}, {prompt} tutorial, {prompt} 2025, what is {prompt}, how to use {prompt}, \
{prompt} for beginners, {prompt} tips, tech review"
            ),
            description: format!(
                "Everything you need to know about {prompt} in 2025. This comprehensive guide covers \
everything from the basics to advanced techniques. Perfect for beginners and experts alike!\n\n\
👇 LINKS & RESOURCES MENTIONED 👇\n[Link 1]\n[Link 2]\n\n\
🕒 TIMESTAMPS:\n\
00:00 - The Big Question about {prompt}\n\
01:23 - Core Concepts Explained\n\
03:45 - Feature Deep Dive\n\
07:12 - Pro Tips & Tricks\n\
09:30 - Final Verdict"
            ),
            script_outline: format!(
                "
- **Intro (0-30s):** Hook viewers with a surprising fact or question about {prompt}. Briefly state what the video will cover.
- **Part 1: The Basics (30s-2m):** Explain what {prompt} is in simple terms. Use an analogy.
- **Part 2: Key Features (2m-5m):** Showcase the top 3-5 features. Use screen recordings or animations for each.
- **Part 3: Practical Use-Case (5m-7m):** Walk through a real-world example of using {prompt}.
- **Part 4: Advanced Tips (7m-9m):** Share a secret tip or a common mistake to avoid.
- **Outro (9m-10m):** Summarize the key takeaways. Ask viewers to comment with their questions. Call to action to subscribe and watch another video."
            ),
            hash_tags: format!(
                "#{compact} #Guide2025 #{first_word}Tutorial #TechExplained #Review"
            ),
            voice_transcript_hook: format!(
                "(Upbeat, modern synth music fades)\n\n\
Host: \"Is {prompt} really the future, or is it just hype? By the end of this video, you'll have \
a definitive answer. We're breaking down everything you need to know, from the absolute basics \
to the pro-level secrets that nobody is talking about. Let's get into it!\""
            ),
        }
    }
}
