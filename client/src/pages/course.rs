//! Course planner: AI chat that recommends date courses.
//!
//! SYSTEM CONTEXT
//! ==============
//! Default landing page for onboarded users. The left column lists chat
//! sessions; the thread shows the active one. Assistant replies may carry a
//! `CourseRecommendation`, which can be saved to "My courses".
//!
//! CREDITS
//! =======
//! A reply that builds a course costs `GENERATION_COST`. When the backend
//! bills the turn itself it reports the new balance in the response;
//! otherwise the client deducts explicitly. Sending is refused up front when
//! the known balance cannot cover a generation.

#[cfg(test)]
#[path = "course_test.rs"]
mod course_test;

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::components::place_list::PlaceList;
use crate::net::types::{ChatMessage, ChatRole, CourseRecommendation, SendMessageResponse};
use crate::state::chat::ChatState;
use crate::state::credits::{CreditsState, GENERATION_COST};
use crate::state::session::SessionContext;
use crate::state::toast::ToastState;
use crate::util::format;

const MAX_PROMPT_CHARS: usize = 1_000;

fn validate_prompt(raw: &str) -> Result<String, &'static str> {
    let prompt = raw.trim();
    if prompt.is_empty() {
        return Err("Describe the date you have in mind.");
    }
    if prompt.chars().count() > MAX_PROMPT_CHARS {
        return Err("Keep the request under 1,000 characters.");
    }
    Ok(prompt.to_owned())
}

/// The client deducts only when the reply built a course the backend did not bill.
fn needs_client_charge(resp: &SendMessageResponse) -> bool {
    resp.balance.is_none() && resp.reply.recommendation.is_some()
}

/// Context handles used by the planner's actions.
#[derive(Clone, Copy)]
struct Planner {
    session: SessionContext,
    toasts: RwSignal<ToastState>,
    credits: RwSignal<CreditsState>,
    chat: RwSignal<ChatState>,
}

impl Planner {
    fn from_context() -> Self {
        Self {
            session: expect_context::<SessionContext>(),
            toasts: expect_context::<RwSignal<ToastState>>(),
            credits: expect_context::<RwSignal<CreditsState>>(),
            chat: expect_context::<RwSignal<ChatState>>(),
        }
    }

    fn load_sessions(self) {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match self.session.api().list_chat_sessions().await {
                Ok(list) => self.chat.update(|c| c.set_sessions(list)),
                Err(e) => crate::util::feedback::report_error(self.session, self.toasts, &e),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = self;
    }

    fn new_session(self) {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match self.session.api().create_chat_session().await {
                Ok(created) => self.chat.update(|c| c.add_session(created)),
                Err(e) => crate::util::feedback::report_error(self.session, self.toasts, &e),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = self;
    }

    fn open(self, id: String) {
        self.chat.update(|c| c.loading = true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match self.session.api().get_chat_session(&id).await {
                Ok(detail) => self.chat.update(|c| c.open(detail)),
                Err(e) => {
                    self.chat.update(|c| c.loading = false);
                    crate::util::feedback::report_error(self.session, self.toasts, &e);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    }

    fn delete(self, id: String) {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match self.session.api().delete_chat_session(&id).await {
                Ok(()) => self.chat.update(|c| c.remove_session(&id)),
                Err(e) => crate::util::feedback::report_error(self.session, self.toasts, &e),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (self, id);
    }

    fn send(self, prompt: String) {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::util::feedback::report_error;

            let api = self.session.api();
            let active = self.chat.get_untracked().active_id;
            let session_id = match active {
                Some(id) => id,
                None => match api.create_chat_session().await {
                    Ok(created) => {
                        let id = created.id.clone();
                        self.chat.update(|c| c.add_session(created));
                        id
                    }
                    Err(e) => {
                        report_error(self.session, self.toasts, &e);
                        return;
                    }
                },
            };

            let mut pending = String::new();
            self.chat.update(|c| pending = c.push_pending(&prompt));

            match api.send_chat_message(&session_id, &prompt).await {
                Ok(resp) => {
                    let charge = needs_client_charge(&resp);
                    if let Some(balance) = resp.balance {
                        self.credits.update(|c| c.balance = Some(balance));
                    }
                    self.chat.update(|c| {
                        if c.active_id.as_deref() == Some(session_id.as_str()) {
                            c.apply_reply(&pending, resp.reply);
                        } else {
                            c.sending = false;
                        }
                    });
                    if charge {
                        self.charge_generation().await;
                    }
                }
                Err(e) => {
                    self.chat.update(|c| c.fail_pending(&pending));
                    report_error(self.session, self.toasts, &e);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (self, prompt);
    }

    #[cfg(feature = "hydrate")]
    async fn charge_generation(self) {
        let req = crate::net::types::DeductRequest { amount: GENERATION_COST, reason: "course_generation".to_owned() };
        match self.session.api().deduct_balance(&req).await {
            Ok(b) => self.credits.update(|c| c.balance = Some(b.balance)),
            Err(e) => {
                leptos::logging::warn!("credit deduction failed: {e}");
                crate::util::feedback::report_error(self.session, self.toasts, &e);
            }
        }
    }

    fn save(self, rec: CourseRecommendation) {
        let chat_session_id = self.chat.get_untracked().active_id;
        let req = crate::net::types::CreateCourseRequest::from_recommendation(&rec, chat_session_id);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::state::toast::ToastKind;
            match self.session.api().create_course(&req).await {
                Ok(course) => crate::util::feedback::notify(
                    self.toasts,
                    ToastKind::Success,
                    format!("Saved \"{}\" to My courses.", course.title),
                ),
                Err(e) => crate::util::feedback::report_error(self.session, self.toasts, &e),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = req;
    }
}

#[component]
pub fn CoursePage() -> impl IntoView {
    let planner = Planner::from_context();
    let chat = planner.chat;
    let credits = planner.credits;
    let prompt = RwSignal::new(String::new());

    planner.load_sessions();

    let on_send = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if chat.get_untracked().sending {
            return;
        }
        let text = match validate_prompt(&prompt.get_untracked()) {
            Ok(text) => text,
            Err(msg) => {
                crate::util::feedback::notify(planner.toasts, crate::state::toast::ToastKind::Info, msg);
                return;
            }
        };
        if let Some(short) = credits.get_untracked().shortfall(GENERATION_COST) {
            crate::util::feedback::notify(
                planner.toasts,
                crate::state::toast::ToastKind::Error,
                format!("Not enough credits: {} more needed.", format::credits(short)),
            );
            return;
        }
        prompt.set(String::new());
        planner.send(text);
    };

    view! {
        <NavBar/>
        <main class="planner">
            <aside class="planner__sessions">
                <button class="btn btn--primary" on:click=move |_| planner.new_session()>"New chat"</button>
                <ul class="session-list">
                    <For
                        each=move || chat.get().sessions
                        key=|s| (s.id.clone(), s.title.clone())
                        children=move |s| {
                            let id = s.id.clone();
                            let open_id = id.clone();
                            let delete_id = id.clone();
                            let title = s.display_title().to_owned();
                            let is_active = move || chat.get().active_id.as_deref() == Some(id.as_str());
                            view! {
                                <li class=move || {
                                    if is_active() { "session-list__item session-list__item--active" } else { "session-list__item" }
                                }>
                                    <button class="session-list__open" on:click=move |_| planner.open(open_id.clone())>
                                        {title}
                                    </button>
                                    <button
                                        class="session-list__delete"
                                        aria-label="Delete chat"
                                        on:click=move |_| planner.delete(delete_id.clone())
                                    >
                                        "✕"
                                    </button>
                                </li>
                            }
                        }
                    />
                </ul>
            </aside>
            <section class="planner__thread">
                <Show when=move || chat.get().loading>
                    <p class="planner__hint">"Loading conversation..."</p>
                </Show>
                <Show when=move || { let c = chat.get(); c.messages.is_empty() && !c.loading }>
                    <p class="planner__hint">
                        "Tell us where, when, and what you both like. A full course costs "
                        {format::credits(GENERATION_COST)}
                        "."
                    </p>
                </Show>
                <ul class="message-list">
                    <For
                        each=move || chat.get().messages
                        key=|m| m.id.clone()
                        children=move |m| view! { <MessageItem message=m planner=planner/> }
                    />
                </ul>
                <form class="planner__composer" on:submit=on_send>
                    <textarea
                        class="planner__input"
                        rows="3"
                        placeholder="e.g. A rainy Saturday in Seongsu, cafes and an exhibition"
                        prop:value=move || prompt.get()
                        on:input=move |ev| prompt.set(event_target_value(&ev))
                    ></textarea>
                    <button class="btn btn--primary" type="submit" disabled=move || chat.get().sending>
                        {move || if chat.get().sending { "Planning..." } else { "Send" }}
                    </button>
                </form>
            </section>
        </main>
    }
}

#[component]
fn MessageItem(message: ChatMessage, planner: Planner) -> impl IntoView {
    let pending = ChatState::is_pending(&message);
    let role_class = match message.role {
        ChatRole::User => "message message--user",
        ChatRole::Assistant => "message message--assistant",
        ChatRole::System => "message message--system",
    };
    let recommendation = message.recommendation.clone().map(|rec| {
        let title = rec.title.clone();
        let description = rec.description.clone();
        let places = rec.places.clone();
        view! {
            <div class="recommendation">
                <h3 class="recommendation__title">{title}</h3>
                <p class="recommendation__description">{description}</p>
                <PlaceList places=places/>
                <button class="btn" on:click=move |_| planner.save(rec.clone())>"Save to My courses"</button>
            </div>
        }
    });

    view! {
        <li class={if pending { format!("{role_class} message--pending") } else { role_class.to_owned() }}>
            <p class="message__content">{message.content}</p>
            {recommendation}
        </li>
    }
}
