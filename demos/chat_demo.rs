//! 聊天助手演示
//!
//! 运行: cargo run --example chat_demo

use neurolocus::chat::ChatBot;
use neurolocus::theme::ThemeManager;

fn main() {
    let theme = ThemeManager::new();
    let bot = ChatBot::new();

    println!("Bot> {}\n", theme.config().chatbot_welcome);

    for question in [
        "what is ependymoma",
        "how does ai detection work",
        "what are the symptoms",
        "treatment options",
        "can you book me an appointment?",
    ] {
        println!("You> {}", question);
        println!("Bot> {}\n", bot.respond(question));
    }
}
