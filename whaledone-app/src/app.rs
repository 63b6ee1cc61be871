//! The application shell: current screen, navigation data and the event
//! dispatcher that routes user actions into the domain types.

use anyhow::{Context, Result};
use tracing::{debug, info, trace};
use whaledone_core::compose::{ComposeError, Draft, DraftKind, Recipients, THANK_YOU_REWARD};
use whaledone_core::inbox::OpenOutcome;
use whaledone_core::insights::DetailAccess;
use whaledone_core::sent::ReplyOutcome;
use whaledone_core::signup::{Advanced, Back, SignupFlow};
use whaledone_core::{Language, NavigationData, Preferences, Screen};

use crate::events::{AppEvent, EventReceiver, EventSender, Feedback, Rejection, SignupField};
use crate::state::{Dashboard, Session};
use crate::timer::CountdownTimer;

fn rejected(err: impl Into<Rejection>) -> Feedback {
    let rejection = err.into();
    debug!(%rejection, "action rejected");
    Feedback::Rejected(rejection)
}

pub struct App {
    screen: Screen,
    nav: NavigationData,
    session: Session,
    prefs: Preferences,
    language: Language,
    events: EventSender,
    countdown: Option<CountdownTimer>,
    countdown_generation: u64,
}

impl App {
    /// Starts on the login screen with a seeded session and the stored
    /// language.
    pub async fn new(
        prefs: Preferences,
        events: EventSender,
    ) -> Result<Self> {
        let language = prefs
            .language()
            .await
            .context("failed to read language preference")?;
        info!(language = language.as_str(), "app started");

        Ok(Self {
            screen: Screen::default(),
            nav: NavigationData::default(),
            session: Session::seeded(),
            prefs,
            language,
            events,
            countdown: None,
            countdown_generation: 0,
        })
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn nav(&self) -> &NavigationData {
        &self.nav
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn dashboard(&self) -> Dashboard {
        self.session.dashboard()
    }

    pub fn shows_bottom_nav(&self) -> bool {
        self.screen.shows_bottom_nav()
    }

    pub fn countdown_running(&self) -> bool {
        self.countdown.is_some()
    }

    /// Handles events until [`AppEvent::Quit`]. The app holds a sender of
    /// its own, so the channel never closes by itself.
    pub async fn run(
        &mut self,
        mut events: EventReceiver,
    ) -> Result<()> {
        while let Some(event) = events.recv().await {
            match self.handle(event).await? {
                Feedback::Quit => break,
                feedback => trace!(?feedback, "event handled"),
            }
        }
        Ok(())
    }

    /// Applies one event. Only preference-store failures are errors;
    /// everything the user can get wrong comes back as
    /// [`Feedback::Rejected`].
    pub async fn handle(
        &mut self,
        event: AppEvent,
    ) -> Result<Feedback> {
        let feedback = match event {
            AppEvent::Navigate { screen, data } => self.navigate(screen, data).await?,
            AppEvent::Login => {
                info!("logged in");
                self.navigate(Screen::Home, NavigationData::default())
                    .await?
            }
            AppEvent::Logout => {
                info!("logged out");
                self.navigate(Screen::Login, NavigationData::default())
                    .await?
            }

            AppEvent::SignupInput { field, value } => {
                self.set_signup_field(field, &value);
                Feedback::None
            }
            AppEvent::SignupNext => match self.session.signup.advance() {
                Ok(Advanced {
                    navigate: Some(screen),
                    ..
                }) => self.navigate(screen, NavigationData::default()).await?,
                Ok(_) => Feedback::None,
                Err(err) => rejected(err),
            },
            AppEvent::SignupBack => match self.session.signup.back() {
                Back::Step(_) => Feedback::None,
                Back::Leave(screen) => self.navigate(screen, NavigationData::default()).await?,
            },
            AppEvent::ResendCode => match self.session.signup.resend_code() {
                Ok(()) => Feedback::None,
                Err(err) => rejected(err),
            },
            AppEvent::Tick { generation } => {
                // Ticks queued by a timer that has since been replaced are stale.
                if self
                    .countdown
                    .as_ref()
                    .is_some_and(|t| t.generation() == generation)
                {
                    self.session.signup.tick();
                }
                Feedback::None
            }

            AppEvent::SearchContacts(query) => {
                self.session.contacts.set_query(query);
                Feedback::None
            }
            AppEvent::ToggleContact(id) => match self.session.contacts.toggle(&id) {
                Ok(_) => Feedback::None,
                Err(err) => rejected(err),
            },
            AppEvent::AddContact(new) => match self.session.contacts.add_contact(new) {
                Ok(_) => Feedback::None,
                Err(err) => rejected(err),
            },
            AppEvent::ContinueToCompose => {
                if !self.session.contacts.can_continue() {
                    return Ok(rejected(ComposeError::NoRecipients));
                }
                let data = NavigationData {
                    selected_contacts: self.session.contacts.selected_contacts(),
                    ..Default::default()
                };
                self.navigate(Screen::Write, data).await?
            }

            AppEvent::EditDraft(text) => {
                if let Some(draft) = self.session.draft.as_mut() {
                    draft.set_text(text);
                }
                Feedback::None
            }
            AppEvent::ToggleRecipients => {
                self.session.recipients.toggle_expanded();
                Feedback::None
            }
            AppEvent::SendCompliment => self.send_compliment().await?,
            AppEvent::SendThankYou => self.send_thank_you().await?,

            AppEvent::SetInboxTab(tab) => {
                self.session.inbox.set_tab(tab);
                Feedback::None
            }
            AppEvent::OpenMessage(id) => {
                match self.session.inbox.open(&id, &self.session.wallet) {
                    Ok(OpenOutcome::Opened(_)) => Feedback::None,
                    Ok(OpenOutcome::ConfirmUnlock { cost, balance }) => {
                        Feedback::ConfirmUnlock { cost, balance }
                    }
                    Ok(OpenOutcome::InsufficientPoints { cost, balance }) => {
                        Feedback::InsufficientPoints { cost, balance }
                    }
                    Err(err) => rejected(err),
                }
            }
            AppEvent::UnlockMessage(id) => {
                match self.session.inbox.unlock(&id, &mut self.session.wallet) {
                    Ok(_) => Feedback::None,
                    Err(err) => rejected(err),
                }
            }
            AppEvent::CloseMessage => {
                self.session.inbox.close();
                Feedback::None
            }
            AppEvent::ReplyToMessage(id) => {
                if let Err(err) = self.session.inbox.get(&id) {
                    return Ok(rejected(err));
                }
                let data = NavigationData {
                    message_id: Some(id),
                    ..Default::default()
                };
                self.navigate(Screen::Thank, data).await?
            }

            AppEvent::OpenReply {
                message_id,
                reply_id,
            } => match self
                .session
                .sent
                .open_reply(&message_id, &reply_id, &self.session.wallet)
            {
                Ok(ReplyOutcome::Opened(_)) => Feedback::None,
                Ok(ReplyOutcome::ConfirmUnlock { cost, balance }) => {
                    Feedback::ConfirmUnlock { cost, balance }
                }
                Ok(ReplyOutcome::InsufficientPoints { cost, balance }) => {
                    Feedback::InsufficientPoints { cost, balance }
                }
                Err(err) => rejected(err),
            },
            AppEvent::UnlockReply {
                message_id,
                reply_id,
            } => match self.session.sent.unlock_reply(
                &message_id,
                &reply_id,
                &mut self.session.wallet,
            ) {
                Ok(_) => Feedback::None,
                Err(err) => rejected(err),
            },

            AppEvent::OpenNotification(id) => match self.session.notifications.open(&id) {
                Some(screen) => self.navigate(screen, NavigationData::default()).await?,
                None => Feedback::None,
            },
            AppEvent::MarkAllNotificationsRead => {
                self.session.notifications.mark_all_read();
                Feedback::None
            }

            AppEvent::ViewDetailedStats => match self.session.insights.detailed_stats() {
                DetailAccess::Granted => Feedback::DetailedStats,
                DetailAccess::SubscriptionRequired => Feedback::SubscriptionRequired,
            },

            AppEvent::SetLanguage(language) => {
                self.set_language(language).await?;
                Feedback::None
            }
            AppEvent::SetNotificationsEnabled(enabled) => {
                self.session.notifications_enabled = enabled;
                debug!(enabled, "notifications toggled");
                Feedback::None
            }

            AppEvent::Quit => Feedback::Quit,
        };

        self.sync_countdown();
        Ok(feedback)
    }

    /// Persists the language and switches to it.
    pub async fn set_language(
        &mut self,
        language: Language,
    ) -> Result<()> {
        self.prefs
            .set_language(language)
            .await
            .context("failed to save language preference")?;
        self.language = language;
        info!(language = language.as_str(), "language changed");
        Ok(())
    }

    fn set_signup_field(
        &mut self,
        field: SignupField,
        value: &str,
    ) {
        let flow = &mut self.session.signup;
        match field {
            SignupField::Phone => flow.set_phone(value),
            SignupField::PhoneOtp => flow.set_phone_otp(value),
            SignupField::Email => flow.set_email(value),
            SignupField::EmailOtp => flow.set_email_otp(value),
            SignupField::Name => flow.set_name(value),
            SignupField::Password => flow.set_password(value),
            SignupField::ConfirmPassword => flow.set_confirm_password(value),
            SignupField::InviteCode => flow.set_invite_code(value),
        }
    }

    async fn navigate(
        &mut self,
        screen: Screen,
        data: NavigationData,
    ) -> Result<Feedback> {
        debug!(
            from = self.screen.as_str(),
            to = screen.as_str(),
            "navigate"
        );
        self.screen = screen;
        self.nav = data;
        self.enter(screen).await
    }

    /// Per-screen setup on arrival.
    async fn enter(
        &mut self,
        screen: Screen,
    ) -> Result<Feedback> {
        match screen {
            Screen::SignUp => self.session.signup = SignupFlow::new(),
            Screen::Send => {
                let picker = &mut self.session.contacts;
                picker.clear_selection();
                picker.set_query("");
                if let Some(name) = self.nav.preselected_contact.as_deref() {
                    picker.preselect_by_name(name);
                }
                if self
                    .prefs
                    .first_visit()
                    .await
                    .context("failed to update visited flag")?
                {
                    return Ok(Feedback::WelcomePopup);
                }
            }
            Screen::Write => {
                self.session.draft = Some(Draft::new(DraftKind::Compliment));
                self.session.recipients = Recipients::new(self.nav.selected_contacts.clone());
            }
            Screen::Thank => self.session.draft = Some(Draft::new(DraftKind::ThankYou)),
            Screen::Inbox => self.session.inbox.close(),
            _ => {}
        }
        Ok(Feedback::None)
    }

    fn open_draft(
        &mut self,
        kind: DraftKind,
    ) -> Option<&mut Draft> {
        self.session.draft.as_mut().filter(|d| d.kind() == kind)
    }

    async fn send_compliment(&mut self) -> Result<Feedback> {
        if self.session.recipients.is_empty() {
            return Ok(rejected(ComposeError::NoRecipients));
        }
        let Some(draft) = self.open_draft(DraftKind::Compliment) else {
            return Ok(rejected(ComposeError::Empty));
        };
        let text = match draft.take() {
            Ok(text) => text,
            Err(err) => return Ok(rejected(err)),
        };

        let recipients = self.session.recipients.contacts().len();
        info!(
            recipients,
            chars = text.chars().count(),
            "compliment sent"
        );
        self.session.draft = None;
        self.navigate(Screen::Home, NavigationData::default())
            .await?;
        Ok(Feedback::ComplimentSent { recipients })
    }

    async fn send_thank_you(&mut self) -> Result<Feedback> {
        let Some(message_id) = self.nav.message_id.clone() else {
            return Ok(rejected(ComposeError::NoRecipients));
        };
        let Some(draft) = self.open_draft(DraftKind::ThankYou) else {
            return Ok(rejected(ComposeError::Empty));
        };
        if let Err(err) = draft.validate() {
            return Ok(rejected(err));
        }
        let text = draft.text().to_string();
        if let Err(err) = self.session.inbox.reply(&message_id, &text) {
            return Ok(rejected(err));
        }

        info!(message_id, reward = THANK_YOU_REWARD, "thank-you sent");
        self.session.draft = None;
        self.navigate(Screen::Inbox, NavigationData::default())
            .await?;
        Ok(Feedback::ThankYouSent {
            points: THANK_YOU_REWARD,
        })
    }

    /// Runs the countdown timer exactly while the signup screen waits for a
    /// code that has not expired.
    fn sync_countdown(&mut self) {
        let wanted = self.screen == Screen::SignUp && self.session.signup.awaiting_code();
        match (wanted, self.countdown.is_some()) {
            (true, false) => {
                self.countdown_generation += 1;
                self.countdown = Some(CountdownTimer::start(
                    self.events.clone(),
                    self.countdown_generation,
                ));
            }
            (false, true) => self.countdown = None,
            _ => {}
        }
    }
}
