//! Application constants
//!
//! Centralized location for simulated latencies and user-visible strings.

use std::time::Duration;

/// Application name
pub const APP_NAME: &str = "mockapi-tui";

/// Config directory under the home directory
pub const CONFIG_DIR_NAME: &str = ".mockapi-tui";

/// Config file inside `CONFIG_DIR_NAME`
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Default log file, relative to the working directory
pub const DEFAULT_LOG_FILE: &str = "mockapi-tui.log";

// Simulated latencies

pub const USERS_GET_ALL_DELAY: Duration = Duration::from_millis(500);
pub const USERS_GET_BY_ID_DELAY: Duration = Duration::from_millis(300);
pub const USERS_CREATE_DELAY: Duration = Duration::from_millis(700);
pub const USERS_UPDATE_DELAY: Duration = Duration::from_millis(500);
pub const USERS_DELETE_DELAY: Duration = Duration::from_millis(600);

pub const POSTS_GET_ALL_DELAY: Duration = Duration::from_millis(600);
pub const POSTS_GET_BY_ID_DELAY: Duration = Duration::from_millis(400);
pub const POSTS_GET_BY_USER_ID_DELAY: Duration = Duration::from_millis(500);
pub const POSTS_CREATE_DELAY: Duration = Duration::from_millis(800);

pub const COMMENTS_GET_BY_POST_ID_DELAY: Duration = Duration::from_millis(400);
pub const COMMENTS_CREATE_DELAY: Duration = Duration::from_millis(500);

pub const SIMULATE_ERROR_DELAY: Duration = Duration::from_millis(300);
pub const SIMULATE_TIMEOUT_DELAY: Duration = Duration::from_millis(5000);

/// Body of the delayed response
pub const DELAYED_MESSAGE: &str = "This response was delayed";

// View text

pub const TITLE: &str = "モックAPI テスト";
pub const LOAD_USERS_FAILED: &str = "ユーザーデータの取得に失敗しました: ";
pub const SELECT_USER_FAILED: &str = "ユーザー詳細の取得に失敗しました: ";
pub const CREATE_USER_FAILED: &str = "ユーザーの作成に失敗しました: ";
pub const DELETE_USER_FAILED: &str = "ユーザーの削除に失敗しました: ";
pub const LOAD_COMMENTS_FAILED: &str = "コメントの取得に失敗しました: ";
pub const SIMULATED_ERROR_PREFIX: &str = "API エラー: ";
pub const FORM_INCOMPLETE: &str = "すべての項目を入力してください";
pub const AGE_INVALID: &str = "年齢には正しい数値を入力してください";
pub const TIMEOUT_PENDING: &str = "遅延レスポンスを待っています...";
