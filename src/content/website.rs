/// Landing-page copy for a prompt.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebsiteCopy {
    pub seo_title: String,
    pub meta_description: String,
    pub h1_headline: String,
    pub h2_subheadline: String,
    pub key_features: String,
    pub expanded_body: String,
    pub call_to_action_section: String,
    pub hero_image_idea: String,
}

const KEY_FEATURES: &str = "
- **Intuitive Interface:** Get up and running in minutes, not weeks.
- **Powerful Automation:** Automate complex tasks and free up your team for high-value work.
- **Advanced Analytics:** Gain deep insights with our real-time data and reporting.
- **Seamless Integration:** Connects with the tools you already use and love.";

const CALL_TO_ACTION: &str =
    "**Primary CTA:** \"Request a Personalized Demo\"\n**Secondary CTA:** \"Explore Features\"";

impl WebsiteCopy {
    pub fn for_prompt(prompt: &str) -> Self {
        Self {
            seo_title: format!("{prompt} | The Future of [Your Industry] is Here"),
            meta_description: format!(
                "Unlock the power of {prompt} with our innovative platform. Boost productivity, \
enhance creativity, and achieve your goals faster. See how our solution for {prompt} can \
transform your business."
            ),
            h1_headline: format!("Transform Your Business with {prompt}"),
            h2_subheadline: format!(
                "Stop wasting time on outdated methods. Embrace the future and unlock unparalleled \
efficiency and innovation with our cutting-edge {prompt} solution."
            ),
            key_features: KEY_FEATURES.to_string(),
            expanded_body: format!(
                "In a fast-paced digital world, staying ahead means leveraging the best tools. \
{prompt} is a complete game-changer, offering unparalleled efficiency and power. Our solution is \
designed from the ground up to be intuitive, scalable, and secure, ensuring you get the most out \
of this incredible technology. Whether you're a small team or a large enterprise, our platform \
adapts to your needs."
            ),
            call_to_action_section: CALL_TO_ACTION.to_string(),
            hero_image_idea: format!(
                "A clean, professional photo showing a diverse team collaborating in a modern \
office, with abstract, glowing UI elements related to \"{prompt}\" overlaid in the foreground."
            ),
        }
    }
}
