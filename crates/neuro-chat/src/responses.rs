//! 预置应答表
//!
//! 表项按声明顺序匹配，取第一个命中的关键词。

use tracing::debug;

/// 按关键词排列的应答表
const RESPONSES: [(&str, &str); 4] = [
    (
        "what is ependymoma",
        "Ependymoma is a rare type of glial tumor that originates from ependymal cells, \
         which line the ventricles of the brain and the central canal of the spinal cord. \
         Ependymomas can occur at any age but are most common in children under 5 years old. \
         Common locations include the posterior fossa (60%), supratentorial region (30%), \
         and spinal cord (10%). Early detection through advanced imaging and AI-assisted \
         diagnosis significantly improves treatment outcomes and prognosis.",
    ),
    (
        "how does ai detection work",
        "Our NeuroLocusAI system analyzes MRI brain scans with convolutional neural \
         networks: scans are normalized and standardized, characteristic patterns and \
         intensity distributions are extracted, and the model simultaneously detects the \
         presence of ependymoma and localizes the tumor, providing confidence scores. \
         This AI-assisted approach serves as a decision-support tool for medical \
         professionals.",
    ),
    (
        "what are the symptoms",
        "Common symptoms include: headaches (especially in the morning), nausea and \
         vomiting, balance problems, vision changes, seizures, and neck pain or stiffness. \
         In infants, you may notice increased head size. Symptoms vary based on tumor \
         location.",
    ),
    (
        "treatment options",
        "Treatment typically involves surgical removal as the primary approach, often \
         followed by radiation therapy. Chemotherapy may be used in certain cases, \
         especially for younger patients or recurrent tumors. The treatment plan depends \
         on tumor location, grade, and extent of removal.",
    ),
];

/// 默认应答
const DEFAULT_RESPONSE: &str = "I can help you understand ependymoma, explain our AI \
     detection process, discuss symptoms, or answer other medical questions. Please note \
     that this system is for educational purposes only and should not replace professional \
     medical advice.";

/// 预置应答聊天助手
#[derive(Debug, Default)]
pub struct ChatBot;

impl ChatBot {
    pub fn new() -> Self {
        Self
    }

    /// 对一条用户消息给出应答
    pub fn respond(&self, message: &str) -> &'static str {
        let lower = message.to_lowercase();
        for (key, response) in RESPONSES {
            if lower.contains(key) {
                debug!("Chat matched key: {}", key);
                return response;
            }
        }
        DEFAULT_RESPONSE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_keys_matched() {
        let bot = ChatBot::new();
        assert!(bot.respond("what is ependymoma?").contains("glial tumor"));
        assert!(bot
            .respond("Tell me, how does AI detection work here?")
            .contains("MRI brain scans"));
        assert!(bot.respond("what are the symptoms").contains("headaches"));
        assert!(bot.respond("treatment options please").contains("surgical removal"));
    }

    #[test]
    fn test_case_insensitive() {
        let bot = ChatBot::new();
        assert_eq!(
            bot.respond("WHAT IS EPENDYMOMA"),
            bot.respond("what is ependymoma")
        );
    }

    #[test]
    fn test_unknown_message_falls_back() {
        let bot = ChatBot::new();
        assert!(bot.respond("hello there").contains("educational purposes only"));
    }
}
