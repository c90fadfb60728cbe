use gloo_timers::callback::Timeout;
use log::{debug, info};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::chatbot::{respond, ConversationLog, Speaker, FAQ_TOPICS};
use crate::config;

pub enum FaqChatbotMsg {
    Toggle,
    SetInput(String),
    Send,
    BotReply(String),
}

pub struct FaqChatbot {
    open: bool,
    input: String,
    log: ConversationLog,
    pending_replies: usize,
    messages_end: NodeRef,
    scrolled_len: usize,
}

impl Component for FaqChatbot {
    type Message = FaqChatbotMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            open: false,
            input: String::new(),
            log: ConversationLog::with_greeting(),
            pending_replies: 0,
            messages_end: NodeRef::default(),
            scrolled_len: 0,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            FaqChatbotMsg::Toggle => {
                self.open = !self.open;
                self.scrolled_len = 0;
                debug!("FAQ chatbot {}", if self.open { "opened" } else { "closed" });
                true
            }
            FaqChatbotMsg::SetInput(input) => {
                self.input = input;
                true
            }
            FaqChatbotMsg::Send => {
                if self.input.trim().is_empty() {
                    return false;
                }

                let question = std::mem::take(&mut self.input);
                let reply = respond(&question, FAQ_TOPICS, &mut rand::thread_rng());
                info!("FAQ chatbot question: {:?}", question);
                self.log.push(Speaker::User, question);
                self.pending_replies += 1;

                // Simulated typing delay; the reply still lands if the widget closes
                let link = ctx.link().clone();
                let timeout = Timeout::new(config::BOT_REPLY_DELAY_MS, move || {
                    link.send_message(FaqChatbotMsg::BotReply(reply.to_string()));
                });
                timeout.forget();
                true
            }
            FaqChatbotMsg::BotReply(reply) => {
                self.pending_replies = self.pending_replies.saturating_sub(1);
                self.log.push(Speaker::Bot, reply);
                true
            }
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        // Follow new messages only, not every keystroke
        let len = self.log.len() + self.pending_replies;
        if len == self.scrolled_len {
            return;
        }
        if let Some(end) = self.messages_end.cast::<web_sys::Element>() {
            end.scroll_into_view_with_bool(false);
            self.scrolled_len = len;
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let toggle = ctx.link().callback(|_: MouseEvent| FaqChatbotMsg::Toggle);

        if !self.open {
            return html! {
                <div class="faq-chatbot">
                    <button class="faq-chatbot-launcher" onclick={toggle} title="Ask a question">
                        { "💬" }
                    </button>
                </div>
            };
        }

        let oninput = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            FaqChatbotMsg::SetInput(input.value())
        });
        let onkeypress = ctx.link().batch_callback(|e: KeyboardEvent| {
            (e.key() == "Enter").then(|| FaqChatbotMsg::Send)
        });
        let send = ctx.link().callback(|_: MouseEvent| FaqChatbotMsg::Send);

        html! {
            <div class="faq-chatbot">
                <div class="faq-chatbot-panel">
                    <div class="faq-chatbot-header">
                        <h3>{ "FAQ Chatbot" }</h3>
                        <button class="faq-chatbot-close" onclick={toggle}>{ "✕" }</button>
                    </div>

                    <div class="faq-chatbot-messages">
                        { for self.log.messages().iter().map(|message| {
                            let class = match message.speaker {
                                Speaker::User => "chat-message user",
                                Speaker::Bot => "chat-message bot",
                            };
                            html! {
                                <div class={class}>
                                    <div class="message-bubble">{ &message.text }</div>
                                </div>
                            }
                        }) }
                        if self.pending_replies > 0 {
                            <div class="chat-message bot">
                                <div class="message-bubble typing">
                                    <div class="typing-indicator">
                                        <span></span>
                                        <span></span>
                                        <span></span>
                                    </div>
                                </div>
                            </div>
                        }
                        <div ref={self.messages_end.clone()}></div>
                    </div>

                    <div class="faq-chatbot-input">
                        <input
                            type="text"
                            placeholder="Type your question..."
                            value={self.input.clone()}
                            {oninput}
                            {onkeypress}
                        />
                        <button onclick={send}>{ "Send" }</button>
                    </div>
                </div>
            </div>
        }
    }
}
