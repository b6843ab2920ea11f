#[derive(Debug, Clone)]
pub enum Message {
    // === SUBJECT MESSAGES ===
    SubjectUpdated(String),
    SubjectUpdateFailed,
    SubjectDeleted(String),
    SubjectDeleteFailed,
    SubjectNotFound(String),
    SubjectsHeader,
    NoSubjectsFound,
    EditingSubject(String),
    ConfirmDeleteSubject(String),
    ConfirmRetryUpdate,
    DeleteCanceled,
    PromptMarks,
    PromptPriority,
    PromptCategory,

    // === TODO MESSAGES ===
    TaskCannotBeEmpty,
    GoalPeriodRequired,
    TaskAdded,
    TodoAddFailed(String),
    TodoAddError(String),
    TodoLoadError(String),
    TodoMarkDoneFailed(String),
    TodoListEmpty,
    TodoPanelTitle,
    TodoNotFoundWithId(String),
    PromptNewTask,
    PromptGoalPeriod,
    PromptSelectTodo,
    PromptPanelAction,

    // === DEADLINE MESSAGES ===
    ExpiredTasksWarning(String), // bullet list of task names
    ExpiredTasksAcknowledge,

    // === STATS MESSAGES ===
    StatsLoadError(String),
    StatsHeader,
    StatsOverall(u32, u32, u32), // completed, total, percentage

    // === CALENDAR / REMINDER MESSAGES ===
    PastDateReminder,
    PromptReminderText,
    ReminderAdded,
    ReminderAddFailed,
    ReminderLoadError(String),
    NetworkError,
    CalendarTitle(String), // month label
    InvalidDate(String),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleTracker,
    PromptSelectModules,
    PromptTrackerUrl,
    PromptTrackerEmail,
    TrackerNotConfigured,

    // === SESSION MESSAGES ===
    LoggedIn(String), // email
    LoggedOut,
    WrongPassword(i32),

    // === GENERIC MESSAGES ===
    Canceled,
}
