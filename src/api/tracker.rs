use super::{ApiError, Session, MAX_RETRY_COUNT};
use crate::libs::calendar::ReminderEvent;
use crate::libs::chart::GoalStats;
use crate::libs::config::ConfigModule;
use crate::libs::dashboard::{extract_subjects, SubjectRow};
use crate::libs::messages::Message;
use crate::libs::secret::Secret;
use crate::libs::todo::{NewTodo, Todo};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use reqwest::{
    header::{self, HeaderMap, HeaderValue, COOKIE},
    redirect, Client, Response, StatusCode,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::time::Duration;

const COOKIE_KEY: &str = "session=";
const SESSION_ID_FILE: &str = ".session_id";
const SECRET_FILE: &str = ".secret";
const LOGIN_URL: &str = "login";
const DASHBOARD_URL: &str = "dashboard";
const UPDATE_URL: &str = "update";
const DELETE_URL: &str = "delete";
const TODO_URL: &str = "todo";
const TODO_ADD_URL: &str = "todo/add";
const TODO_DONE_URL: &str = "todo/done";
const TODO_DEADLINES_URL: &str = "todo/check-deadlines";
const TODO_STATS_URL: &str = "todo_stats";
const REMINDERS_URL: &str = "reminders";

#[derive(Serialize, Clone, Debug)]
pub struct LoginCredentials {
    email: String,
    password: String,
}

#[derive(Debug, Deserialize)]
struct TodoFeed {
    #[serde(default)]
    todos: Vec<Todo>,
}

#[derive(Debug, Deserialize)]
struct MutationResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DeadlineResponse {
    #[serde(rename = "expiredTasks", default)]
    expired_tasks: Vec<ExpiredTask>,
}

/// A task the server reports as past its deadline.
#[derive(Debug, Clone, Deserialize)]
pub struct ExpiredTask {
    pub task: String,
}

#[derive(Serialize)]
struct DoneRequest<'a> {
    id: &'a str,
}

#[derive(Serialize)]
struct ReminderRequest<'a> {
    title: &'a str,
    date: &'a str,
}

/// Client for the study dashboard server.
///
/// Sessions ride on the server's session cookie. Any call that comes back
/// unauthorized (or bounced to the login page) invalidates the cached
/// session and retries after re-authenticating, up to the shared retry
/// limit.
pub struct Tracker {
    client: Client,
    config: TrackerConfig,
    credentials: Option<LoginCredentials>,
    retries: i32,
}

impl Session for Tracker {
    async fn login(&self) -> Result<String> {
        let credentials = match self.credentials.clone() {
            Some(credentials) => credentials,
            None => anyhow::bail!("Credentials not set"),
        };
        let url = format!("{}/{}", self.config.api_url, LOGIN_URL);
        let res = self.client.post(url).form(&credentials).send().await?;

        // A successful login bounces to the dashboard; a failed one bounces
        // back to the login page. The session cookie only counts for the
        // former.
        let location = res
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("");
        if !location.contains(DASHBOARD_URL) {
            anyhow::bail!("Login failed");
        }

        for cookie in res.headers().get_all(header::SET_COOKIE) {
            if let Ok(cookie_val) = cookie.to_str() {
                if let Some(session) = cookie_val.split(';').map(str::trim).find(|part| part.starts_with(COOKIE_KEY)) {
                    return Ok(session.trim_start_matches(COOKIE_KEY).to_string());
                }
            }
        }

        anyhow::bail!("Login failed")
    }

    fn set_credentials(&mut self, password: &str) -> Result<()> {
        self.credentials = Some(LoginCredentials {
            email: self.config.email.to_string(),
            password: password.to_owned(),
        });
        Ok(())
    }

    fn session_id_file(&self) -> &str {
        SESSION_ID_FILE
    }

    fn secret(&self) -> Secret {
        Secret::new(SECRET_FILE, "Enter your dashboard password")
    }

    fn retry(&self) -> i32 {
        self.retries
    }

    fn inc_retry(&mut self) {
        self.retries += 1;
    }
}

impl Tracker {
    pub fn new(config: &TrackerConfig) -> Result<Self> {
        // Redirects are handled manually: the login flow inspects them and
        // an unexpected bounce on any other call means the session is gone.
        let client = Client::builder().redirect(redirect::Policy::none()).build()?;
        Ok(Self {
            client,
            config: config.clone(),
            credentials: None,
            retries: 0,
        })
    }

    /// Forces a fresh authentication, ignoring any cached session.
    pub async fn refresh_session(&mut self) -> Result<String> {
        self.delete_session_id()?;
        self.get_session_id().await
    }

    /// Drops the cached session id and the stored password.
    pub fn clear_session(&self) -> Result<()> {
        self.delete_session_id()?;
        self.secret().forget()?;
        Ok(())
    }

    /// The account email this client authenticates as.
    pub fn email(&self) -> &str {
        &self.config.email
    }

    /// Fetches the dashboard page and extracts the rendered subject rows.
    pub async fn dashboard(&mut self) -> Result<Vec<SubjectRow>, ApiError> {
        let res = self.get_authed(DASHBOARD_URL).await?;
        let status = res.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }
        let body = res.text().await?;
        extract_subjects(&body).map_err(|err| ApiError::Payload(err.to_string()))
    }

    /// Submits the subject editor form. The subject name is lowercased on
    /// the way out; the server keys rows on the lowercased name.
    pub async fn update_subject(&mut self, subject: &str, marks: i64, priority: &str, category: &str) -> Result<(), ApiError> {
        let form = [
            ("subject", subject.to_lowercase()),
            ("marks", marks.to_string()),
            ("priority", priority.to_string()),
            ("category", category.to_string()),
        ];
        let res = self.post_form(UPDATE_URL, &form).await?;
        expect_success(res.status())
    }

    /// Deletes a subject by its lowercased name.
    pub async fn delete_subject(&mut self, subject: &str) -> Result<(), ApiError> {
        let form = [("subject", subject.to_lowercase())];
        let res = self.post_form(DELETE_URL, &form).await?;
        expect_success(res.status())
    }

    /// Loads the full todo list.
    pub async fn todos(&mut self) -> Result<Vec<Todo>, ApiError> {
        let res = self.get_authed(TODO_URL).await?;
        let status = res.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }
        let feed: TodoFeed = parse_json(res).await?;
        Ok(feed.todos)
    }

    /// Adds a validated task. A non-success status or a `success: false`
    /// payload are distinct failures with distinct messages.
    pub async fn add_todo(&mut self, new_todo: &NewTodo) -> Result<(), ApiError> {
        let res = self.post_json(TODO_ADD_URL, new_todo).await?;
        let status = res.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }
        let data: MutationResponse = parse_json(res).await?;
        if data.success {
            Ok(())
        } else {
            Err(ApiError::Rejected(data.error.unwrap_or_else(|| "Unknown error".to_string())))
        }
    }

    /// Toggles a todo's completion state by id.
    pub async fn mark_todo_done(&mut self, id: &str) -> Result<(), ApiError> {
        let res = self.post_json(TODO_DONE_URL, &DoneRequest { id }).await?;
        let status = res.status();
        let data: MutationResponse = match parse_json(res).await {
            Ok(data) => data,
            Err(_) if !status.is_success() => return Err(ApiError::Status(status)),
            Err(err) => return Err(err),
        };
        if data.success {
            Ok(())
        } else {
            Err(ApiError::Rejected(data.error.unwrap_or_else(|| "Failed to update todo".to_string())))
        }
    }

    /// Asks the server which tasks have passed their deadline.
    pub async fn check_deadlines(&mut self) -> Result<Vec<ExpiredTask>, ApiError> {
        let res = self.get_authed(TODO_DEADLINES_URL).await?;
        let status = res.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }
        let data: DeadlineResponse = parse_json(res).await?;
        Ok(data.expired_tasks)
    }

    /// Fetches the per-period goal completion snapshot.
    pub async fn todo_stats(&mut self) -> Result<GoalStats, ApiError> {
        let res = self.get_authed(TODO_STATS_URL).await?;
        let status = res.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }
        parse_json(res).await
    }

    /// Fetches the reminder event feed.
    pub async fn reminders(&mut self) -> Result<Vec<ReminderEvent>, ApiError> {
        let res = self.get_authed(REMINDERS_URL).await?;
        let status = res.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }
        parse_json(res).await
    }

    /// Creates a reminder for a day-granularity date.
    pub async fn add_reminder(&mut self, title: &str, date: &str) -> Result<(), ApiError> {
        let res = self.post_json(REMINDERS_URL, &ReminderRequest { title, date }).await?;
        let status = res.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }
        let data: MutationResponse = parse_json(res).await?;
        if data.success {
            Ok(())
        } else {
            Err(ApiError::Rejected("Failed to add reminder".to_string()))
        }
    }

    async fn get_authed(&mut self, path: &str) -> Result<Response, ApiError> {
        let url = format!("{}/{}", self.config.api_url, path);
        loop {
            let headers = self.session_headers().await?;
            let res = self.client.get(&url).headers(headers).send().await?;
            match self.retry_on_auth_failure(res.status()).await? {
                true => continue,
                false => return Ok(res),
            }
        }
    }

    async fn post_form(&mut self, path: &str, form: &[(&str, String)]) -> Result<Response, ApiError> {
        let url = format!("{}/{}", self.config.api_url, path);
        loop {
            let headers = self.session_headers().await?;
            let res = self.client.post(&url).headers(headers).form(form).send().await?;
            match self.retry_on_auth_failure(res.status()).await? {
                true => continue,
                false => return Ok(res),
            }
        }
    }

    async fn post_json<T: Serialize + ?Sized>(&mut self, path: &str, payload: &T) -> Result<Response, ApiError> {
        let url = format!("{}/{}", self.config.api_url, path);
        loop {
            let headers = self.session_headers().await?;
            let res = self.client.post(&url).headers(headers).json(payload).send().await?;
            match self.retry_on_auth_failure(res.status()).await? {
                true => continue,
                false => return Ok(res),
            }
        }
    }

    async fn session_headers(&mut self) -> Result<HeaderMap, ApiError> {
        let session_id = self.get_session_id().await.map_err(|err| ApiError::Session(err.to_string()))?;
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_str(&format!("{}{}", COOKIE_KEY, session_id)).map_err(|err| ApiError::Session(err.to_string()))?,
        );
        Ok(headers)
    }

    /// Returns true when the response means the session is stale and the
    /// call should be retried with a fresh one.
    async fn retry_on_auth_failure(&mut self, status: StatusCode) -> Result<bool, ApiError> {
        let auth_failure = matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FOUND | StatusCode::SEE_OTHER);
        if auth_failure && self.retries < MAX_RETRY_COUNT {
            self.delete_session_id().map_err(|err| ApiError::Session(err.to_string()))?;
            tokio::time::sleep(Duration::from_secs(1)).await;
            self.retries += 1;
            return Ok(true);
        }
        Ok(false)
    }
}

async fn parse_json<T: DeserializeOwned>(res: Response) -> Result<T, ApiError> {
    let body = res.text().await?;
    serde_json::from_str(&body).map_err(|err| ApiError::Payload(err.to_string()))
}

fn expect_success(status: StatusCode) -> Result<(), ApiError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(ApiError::Status(status))
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TrackerConfig {
    pub email: String,
    pub api_url: String,
}

impl TrackerConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "tracker".to_string(),
            name: "Dashboard server".to_string(),
        }
    }

    pub fn init(config: &Option<TrackerConfig>) -> Result<Self> {
        let config = config.clone().unwrap_or(Self {
            email: "".to_string(),
            api_url: "".to_string(),
        });
        println!("{}", Message::ConfigModuleTracker);
        Ok(Self {
            email: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptTrackerEmail.to_string())
                .default(config.email)
                .interact_text()?,
            api_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptTrackerUrl.to_string())
                .default(config.api_url)
                .interact_text()?,
        })
    }
}
