mod builder;
mod file;
mod snapshot;
mod status;

pub use builder::StreamTrackerBuilder;
pub use snapshot::{TrackerSnapshot, SNAPSHOT_VERSION};
pub use status::StreamerStatus;

use crate::api::{StreamSource, TwitchApi, QUERY_BATCH_SIZE};
use crate::enums::{Classification, StatusChange};
use crate::error::{Error, FileError};
use crate::response::Stream;
use crate::time::{self, Timestamp};
use crate::types::UserId;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use chrono::Duration;

/// The statuses produced by one polling cycle.
pub type Poll = Vec<StreamerStatus>;

/// Live-state record for a single login. Records are independent; an evaluation touches
/// exactly one record, so logins can be evaluated in any order.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct LoginState {
    /// Last confirmed live state.
    is_online: bool,
    /// When the login was first observed offline while still treated as live. Cleared once
    /// the login is seen live again or the cooldown expires.
    first_offline_at: Option<Timestamp>,
}

/// Tracks login existence, live state, and transitions between polling cycles.
///
/// The tracker owns all per-login state; the caller owns the polling cadence. One cycle is one
/// call to [`StreamTracker::poll`]. Cycles are not internally synchronized, so a tracker
/// shared between tasks must be guarded by a mutex around each cycle.
#[derive(Debug)]
pub struct StreamTracker<S = TwitchApi> {
    /// The underlying API. The methods on [`StreamTracker`] cover the conventional use-cases.
    /// Use this directly for one-off queries.
    pub api: S,
    logins: HashSet<String>,
    to_check_existence: HashSet<String>,
    checked_existence: HashSet<String>,
    state_map: HashMap<String, LoginState>,
    user_ids: HashMap<String, UserId>,
    cooldown: Duration,
}

/// Normalizes a login into the tracking key: lowercased and trimmed. Empty inputs normalize
/// to `None` and never enter the tracked set.
fn normalize_login(login: &str) -> Option<String> {
    let trimmed = login.trim();

    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

impl StreamTracker {
    /// Creates a new [`StreamTracker`] using the given application credentials.
    pub fn new(client_id: String, client_secret: String) -> Self {
        Self::builder(client_id, client_secret).build()
    }

    /// Builder for constructing a [`StreamTracker`].
    pub fn builder(client_id: String, client_secret: String) -> StreamTrackerBuilder {
        StreamTrackerBuilder::new(client_id, client_secret)
    }
}

impl<S> StreamTracker<S>
where
    S: StreamSource,
{
    /// Creates a tracker over a custom [`StreamSource`].
    pub fn with_source(api: S) -> Self {
        Self {
            api,
            logins: HashSet::new(),
            to_check_existence: HashSet::new(),
            checked_existence: HashSet::new(),
            state_map: HashMap::new(),
            user_ids: HashMap::new(),
            cooldown: Duration::zero(),
        }
    }

    /// The set of tracked logins.
    pub fn logins(&self) -> &HashSet<String> {
        &self.logins
    }

    /// The duration a login must remain continuously offline before a
    /// [`StatusChange::Down`] transition is reported.
    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }

    /// Sets the cooldown window.
    pub fn set_cooldown(&mut self, cooldown: Duration) {
        self.cooldown = cooldown;
    }

    /// Replaces the tracked set with the normalized form of `logins`. Empty entries are
    /// dropped and case or whitespace variants collapse into one entry.
    ///
    /// This is a full replace, not a merge. No I/O happens here; logins that have not been
    /// validated before are checked on the next cycle.
    pub fn set_logins<I>(&mut self, logins: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let normalized = logins
            .into_iter()
            .filter_map(|login| normalize_login(login.as_ref()))
            .collect::<HashSet<_>>();

        self.to_check_existence = normalized
            .difference(&self.checked_existence)
            .cloned()
            .collect();
        self.logins = normalized;
    }

    /// Validates any logins that have not yet been checked against the platform. Logins with
    /// no account are removed from the tracked set and their per-login state is dropped; ids
    /// of confirmed accounts are cached. Each login is validated at most once for the
    /// lifetime of the tracker state.
    ///
    /// Validation commits batch by batch. If a batch fails, the error propagates and batches
    /// that already completed stay committed; the remaining logins are retried on the next
    /// cycle.
    pub async fn reconcile(&mut self) -> Result<(), Error> {
        if self.to_check_existence.is_empty() {
            return Ok(());
        }

        let pending = self.to_check_existence
            .iter()
            .cloned()
            .collect::<Vec<_>>();

        for batch in pending.chunks(QUERY_BATCH_SIZE) {
            let users = self.api.fetch_users(batch).await?;
            let mut existing = HashSet::with_capacity(users.len());

            for user in users {
                let login = user.login.to_lowercase();

                self.user_ids.insert(login.clone(), user.id);
                existing.insert(login);
            }

            for login in batch {
                self.to_check_existence.remove(login);
                self.checked_existence.insert(login.clone());

                if !existing.contains(login) {
                    log::debug!("Removing nonexistent login {login}");
                    self.logins.remove(login);
                    self.state_map.remove(login);
                }
            }
        }

        Ok(())
    }

    /// Performs one polling cycle: validates any pending logins, queries live status for the
    /// whole tracked set in batches, and reports every login's status along with any
    /// transition since the previous cycle.
    pub async fn poll(&mut self) -> Result<Poll, Error> {
        self.reconcile().await?;

        let tracked = self.logins
            .iter()
            .cloned()
            .collect::<Vec<_>>();
        let mut live_map = self.live_streams(&tracked).await?;
        let now = time::now();
        let poll = tracked
            .into_iter()
            .map(|login| {
                let stream = live_map.remove(&login);

                self.evaluate_status(login, stream, now)
            })
            .collect::<Vec<_>>();

        Ok(poll)
    }

    /// Classifies each login in `logins` as nonexistent, live, or offline in one pass. This
    /// does not touch the tracked set or any cooldown state; confirmed ids are cached as a
    /// side effect.
    pub async fn classify<I>(
        &mut self,
        logins: I,
    ) -> Result<HashMap<String, Classification>, Error>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let normalized = logins
            .into_iter()
            .filter_map(|login| normalize_login(login.as_ref()))
            .collect::<HashSet<_>>();
        let existing = self.existing_users(&normalized).await?;
        let live_map = self.live_streams(&existing).await?;
        let existing = existing.into_iter().collect::<HashSet<_>>();
        let classified = normalized
            .into_iter()
            .map(|login| {
                let classification = if !existing.contains(&login) {
                    Classification::DoesNotExist
                } else if live_map.contains_key(&login) {
                    Classification::ExistsAndLive
                } else {
                    Classification::ExistsButNotLive
                };

                (login, classification)
            })
            .collect();

        Ok(classified)
    }

    /// The cached platform id for a login. `None` if the login's existence has never been
    /// validated; validate first.
    pub fn user_id(&self, login: &str) -> Option<&str> {
        normalize_login(login)
            .and_then(|login| self.user_ids.get(&login))
            .map(|id| id.as_str())
    }

    /// Exports the tracker's current state as a versioned snapshot.
    pub fn snapshot(&self) -> TrackerSnapshot {
        let mut logins = self.logins
            .iter()
            .cloned()
            .collect::<Vec<_>>();
        let mut checked_existence = self.checked_existence
            .iter()
            .cloned()
            .collect::<Vec<_>>();
        let mut was_online = HashMap::new();
        let mut last_time_offline = HashMap::new();

        logins.sort_unstable();
        checked_existence.sort_unstable();

        for (login, state) in &self.state_map {
            was_online.insert(login.clone(), state.is_online);

            if let Some(first_offline_at) = state.first_offline_at {
                last_time_offline.insert(login.clone(), first_offline_at);
            }
        }

        TrackerSnapshot {
            version: SNAPSHOT_VERSION,
            logins,
            checked_existence,
            was_online,
            last_time_offline,
            cooldown_seconds: self.cooldown.num_seconds().max(0) as u64,
        }
    }

    /// Replaces the tracker's state with `snapshot`. This is a full replace, not a merge.
    /// Logins the snapshot does not mark as checked are revalidated on the next cycle.
    /// Cached platform ids are not part of the snapshot; they are rebuilt lazily.
    ///
    /// Fails on any snapshot version other than [`SNAPSHOT_VERSION`]; there is no migration.
    pub fn restore_snapshot(&mut self, snapshot: TrackerSnapshot) -> Result<(), Error> {
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(Error::UnsupportedSnapshotVersion(snapshot.version));
        }

        let mut state_map = snapshot.was_online
            .into_iter()
            .map(|(login, is_online)| {
                (login, LoginState { is_online, first_offline_at: None })
            })
            .collect::<HashMap<_, _>>();

        for (login, first_offline_at) in snapshot.last_time_offline {
            state_map.entry(login).or_default().first_offline_at = Some(first_offline_at);
        }

        self.logins = snapshot.logins.into_iter().collect();
        self.checked_existence = snapshot.checked_existence.into_iter().collect();
        self.to_check_existence = self.logins
            .difference(&self.checked_existence)
            .cloned()
            .collect();
        self.state_map = state_map;
        self.cooldown = Duration::seconds(snapshot.cooldown_seconds as i64);

        Ok(())
    }

    /// The tracker's state serialized as pretty-printed JSON.
    pub fn export_json(&self) -> Result<String, FileError> {
        Ok(serde_json::to_string_pretty(&self.snapshot())?)
    }

    /// Saves a snapshot of the tracker's state to `path`. The file is written atomically.
    pub async fn save_snapshot(&self, path: &Path) -> Result<(), FileError> {
        file::save_snapshot(&self.snapshot(), path).await
    }

    /// Loads a snapshot from `path` and replaces the tracker's state with it.
    pub fn restore_from_file(&mut self, path: &Path) -> Result<(), Error> {
        let snapshot = file::load_snapshot(path)?;

        self.restore_snapshot(snapshot)
    }

    /// Queries live streams for `logins`, one request per batch, folded into a single map
    /// keyed by login. Absence from the map means the login is not currently live.
    async fn live_streams(&self, logins: &[String]) -> Result<HashMap<String, Stream>, Error> {
        let queries = logins
            .chunks(QUERY_BATCH_SIZE)
            .map(|batch| self.api.fetch_live_streams(batch));
        let mut live_map = HashMap::new();

        for result in futures::future::join_all(queries).await {
            for stream in result? {
                live_map.insert(stream.user_login.to_lowercase(), stream);
            }
        }

        Ok(live_map)
    }

    /// Resolves which of `logins` exist, caching the id of every confirmed account.
    async fn existing_users(&mut self, logins: &HashSet<String>) -> Result<Vec<String>, Error> {
        let all = logins
            .iter()
            .cloned()
            .collect::<Vec<_>>();
        let mut existing = Vec::new();

        for batch in all.chunks(QUERY_BATCH_SIZE) {
            for user in self.api.fetch_users(batch).await? {
                let login = user.login.to_lowercase();

                self.user_ids.insert(login.clone(), user.id);
                existing.push(login);
            }
        }

        Ok(existing)
    }

    /// Evaluates one login's state for this cycle given whether it appeared in the
    /// live-streams result.
    fn evaluate_status(
        &mut self,
        login: String,
        stream: Option<Stream>,
        now: Timestamp,
    ) -> StreamerStatus {
        let state = self.state_map.entry(login.clone()).or_default();

        if let Some(stream) = stream {
            let was_live = state.is_online;

            state.is_online = true;
            state.first_offline_at = None;

            let change = if was_live {
                None
            } else {
                Some(StatusChange::Up)
            };

            return StreamerStatus {
                login,
                is_live: true,
                change,
                stream: Some(stream),
            };
        }

        if state.is_online {
            let first_offline = *state.first_offline_at.get_or_insert(now);

            if now - first_offline < self.cooldown {
                // Still within the grace window. The drop is hidden from the caller until
                // the cooldown resolves it one way or the other.
                return StreamerStatus {
                    login,
                    is_live: true,
                    change: None,
                    stream: None,
                };
            }

            state.is_online = false;
            state.first_offline_at = None;

            return StreamerStatus {
                login,
                is_live: false,
                change: Some(StatusChange::Down),
                stream: None,
            };
        }

        state.is_online = false;

        StreamerStatus {
            login,
            is_live: false,
            change: None,
            stream: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::User;
    use std::sync::Mutex;
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};

    #[derive(Default)]
    struct FakeSource {
        users: Vec<User>,
        streams: Vec<Stream>,
        fail_user_queries_after: Option<usize>,
        user_queries: Mutex<Vec<Vec<String>>>,
        stream_queries: Mutex<Vec<Vec<String>>>,
    }

    #[async_trait]
    impl StreamSource for FakeSource {
        async fn fetch_users(&self, logins: &[String]) -> Result<Vec<User>, Error> {
            let mut queries = self.user_queries.lock().unwrap();

            if let Some(limit) = self.fail_user_queries_after {
                if queries.len() >= limit {
                    return Err(Error::RateLimited);
                }
            }

            queries.push(logins.to_vec());

            Ok(self.users
                .iter()
                .filter(|user| logins.contains(&user.login))
                .cloned()
                .collect())
        }

        async fn fetch_live_streams(&self, logins: &[String]) -> Result<Vec<Stream>, Error> {
            self.stream_queries.lock().unwrap().push(logins.to_vec());

            Ok(self.streams
                .iter()
                .filter(|stream| logins.contains(&stream.user_login))
                .cloned()
                .collect())
        }
    }

    fn tracker_with(api: FakeSource) -> StreamTracker<FakeSource> {
        StreamTracker::with_source(api)
    }

    fn user(login: &str, id: &str) -> User {
        User {
            id: id.into(),
            login: login.into(),
            display_name: login.to_uppercase(),
            broadcaster_type: String::new(),
            description: String::new(),
            profile_image_url: String::new(),
            created_at: Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn live_stream(login: &str) -> Stream {
        Stream {
            id: "40952121085".into(),
            user_id: "101051819".into(),
            user_login: login.into(),
            user_name: login.to_uppercase(),
            game_id: "743".into(),
            game_name: "Chess".into(),
            stream_type: "live".into(),
            title: String::new(),
            viewer_count: 100,
            started_at: Utc.with_ymd_and_hms(2024, 3, 8, 11, 0, 0).unwrap(),
            language: "en".into(),
            thumbnail_url: String::new(),
            is_mature: false,
            tags: Vec::new(),
        }
    }

    fn first_offline_at<S>(tracker: &StreamTracker<S>, login: &str) -> Option<Timestamp> {
        tracker.state_map
            .get(login)
            .and_then(|state| state.first_offline_at)
    }

    #[test]
    fn normalizes_and_collapses_logins() {
        let mut tracker = tracker_with(FakeSource::default());

        tracker.set_logins(["  RealUser ", "realuser", "REALUSER", "", "   ", "other"]);

        assert_eq!(tracker.logins().len(), 2);
        assert!(tracker.logins().contains("realuser"));
        assert!(tracker.logins().contains("other"));
    }

    #[test]
    fn normalization_is_idempotent() {
        let normalized = normalize_login("  StreamerName ").unwrap();

        assert_eq!(normalize_login(&normalized), Some(normalized.clone()));
    }

    #[test]
    fn replacing_logins_skips_already_checked() {
        let mut tracker = tracker_with(FakeSource::default());

        tracker.checked_existence.insert("realuser".to_owned());
        tracker.set_logins(["realuser", "newuser"]);

        assert!(tracker.to_check_existence.contains("newuser"));
        assert!(!tracker.to_check_existence.contains("realuser"));
    }

    #[tokio::test]
    async fn reports_went_live_then_steady_state() {
        let mut tracker = tracker_with(FakeSource {
            users: vec![user("realuser", "141981764")],
            streams: vec![live_stream("realuser")],
            ..Default::default()
        });

        tracker.set_logins(["realuser"]);

        let poll = tracker.poll().await.unwrap();

        assert_eq!(poll.len(), 1);
        assert!(poll[0].is_live);
        assert_eq!(poll[0].change, Some(StatusChange::Up));
        assert!(poll[0].stream.is_some());

        // Still live on the next cycle; no transition is reported.
        let poll = tracker.poll().await.unwrap();

        assert!(poll[0].is_live);
        assert_eq!(poll[0].change, None);
        // Existence is validated once per login, not once per cycle.
        assert_eq!(tracker.api.user_queries.lock().unwrap().len(), 1);
    }

    #[test]
    fn zero_cooldown_reports_offline_immediately() {
        let mut tracker = tracker_with(FakeSource::default());
        let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();

        tracker.evaluate_status("realuser".to_owned(), Some(live_stream("realuser")), t0);

        let status = tracker.evaluate_status(
            "realuser".to_owned(),
            None,
            t0 + Duration::seconds(30),
        );

        assert!(!status.is_live);
        assert_eq!(status.change, Some(StatusChange::Down));
        assert_eq!(first_offline_at(&tracker, "realuser"), None);
    }

    #[test]
    fn cooldown_absorbs_brief_drop() {
        let mut tracker = tracker_with(FakeSource::default());
        let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();

        tracker.set_cooldown(Duration::seconds(60));

        let status = tracker.evaluate_status(
            "realuser".to_owned(),
            Some(live_stream("realuser")),
            t0,
        );

        assert_eq!(status.change, Some(StatusChange::Up));

        // A drop at t+10 stays within the grace window and is reported as still live.
        let status = tracker.evaluate_status(
            "realuser".to_owned(),
            None,
            t0 + Duration::seconds(10),
        );

        assert!(status.is_live);
        assert_eq!(status.change, None);
        assert_eq!(
            first_offline_at(&tracker, "realuser"),
            Some(t0 + Duration::seconds(10)),
        );

        // Back up at t+20; the blip produces no transition at all.
        let status = tracker.evaluate_status(
            "realuser".to_owned(),
            Some(live_stream("realuser")),
            t0 + Duration::seconds(20),
        );

        assert!(status.is_live);
        assert_eq!(status.change, None);
        assert_eq!(first_offline_at(&tracker, "realuser"), None);
    }

    #[test]
    fn cooldown_reports_offline_once_after_expiry() {
        let mut tracker = tracker_with(FakeSource::default());
        let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();

        tracker.set_cooldown(Duration::seconds(60));
        tracker.evaluate_status("realuser".to_owned(), Some(live_stream("realuser")), t0);

        for offset in [10, 40] {
            let status = tracker.evaluate_status(
                "realuser".to_owned(),
                None,
                t0 + Duration::seconds(offset),
            );

            assert!(status.is_live);
            assert_eq!(status.change, None);
        }

        // First cycle where the elapsed time reaches the cooldown.
        let status = tracker.evaluate_status(
            "realuser".to_owned(),
            None,
            t0 + Duration::seconds(70),
        );

        assert!(!status.is_live);
        assert_eq!(status.change, Some(StatusChange::Down));

        // Stays offline afterwards with no further transitions.
        let status = tracker.evaluate_status(
            "realuser".to_owned(),
            None,
            t0 + Duration::seconds(100),
        );

        assert!(!status.is_live);
        assert_eq!(status.change, None);
    }

    #[tokio::test]
    async fn pruned_logins_are_not_polled() {
        let mut tracker = tracker_with(FakeSource {
            users: vec![user("realuser", "141981764")],
            ..Default::default()
        });

        tracker.set_logins(["realuser", "ghostuser123456"]);

        let poll = tracker.poll().await.unwrap();

        assert_eq!(poll.len(), 1);
        assert_eq!(poll[0].login, "realuser");

        tracker.poll().await.unwrap();

        assert!(!tracker.logins().contains("ghostuser123456"));
        assert!(tracker.checked_existence.contains("ghostuser123456"));

        let stream_queries = tracker.api.stream_queries.lock().unwrap();

        assert!(!stream_queries.is_empty());
        assert!(stream_queries
            .iter()
            .flatten()
            .all(|login| login != "ghostuser123456"));
    }

    #[tokio::test]
    async fn batches_live_queries_at_the_platform_limit() {
        let logins = (0..250)
            .map(|n| format!("login{n:03}"))
            .collect::<Vec<_>>();
        let mut tracker = tracker_with(FakeSource {
            users: logins
                .iter()
                .enumerate()
                .map(|(n, login)| user(login, &n.to_string()))
                .collect(),
            streams: logins
                .iter()
                .map(|login| live_stream(login))
                .collect(),
            ..Default::default()
        });

        tracker.set_logins(&logins);

        let poll = tracker.poll().await.unwrap();

        assert_eq!(poll.len(), 250);
        assert!(poll.iter().all(|status| status.is_live));

        let stream_queries = tracker.api.stream_queries.lock().unwrap();
        let mut sizes = stream_queries
            .iter()
            .map(|query| query.len())
            .collect::<Vec<_>>();

        sizes.sort_unstable();

        assert_eq!(sizes, vec![50, 100, 100]);

        // Every login appears in exactly one batch.
        let queried = stream_queries
            .iter()
            .flatten()
            .collect::<HashSet<_>>();

        assert_eq!(queried.len(), 250);
    }

    #[tokio::test]
    async fn validation_keeps_batches_committed_before_a_failure() {
        let logins = (0..150)
            .map(|n| format!("login{n:03}"))
            .collect::<Vec<_>>();
        let mut tracker = tracker_with(FakeSource {
            users: logins
                .iter()
                .enumerate()
                .map(|(n, login)| user(login, &n.to_string()))
                .collect(),
            fail_user_queries_after: Some(1),
            ..Default::default()
        });

        tracker.set_logins(&logins);

        assert!(tracker.reconcile().await.is_err());
        // The first batch stays committed; the rest is retried on the next cycle.
        assert_eq!(tracker.checked_existence.len(), 100);
        assert_eq!(tracker.to_check_existence.len(), 50);
    }

    #[tokio::test]
    async fn classifies_logins_in_one_pass() {
        let mut tracker = tracker_with(FakeSource {
            users: vec![user("realuser", "141981764"), user("idleuser", "44322889")],
            streams: vec![live_stream("realuser")],
            ..Default::default()
        });

        let classified = tracker
            .classify(["realuser", "idleuser", "ghostuser123456"])
            .await
            .unwrap();

        assert_eq!(classified.get("realuser"), Some(&Classification::ExistsAndLive));
        assert_eq!(classified.get("idleuser"), Some(&Classification::ExistsButNotLive));
        assert_eq!(classified.get("ghostuser123456"), Some(&Classification::DoesNotExist));
        // Classification never touches the tracked set or the state machine.
        assert!(tracker.logins().is_empty());
        assert!(tracker.state_map.is_empty());
    }

    #[tokio::test]
    async fn caches_user_ids_on_validation() {
        let mut tracker = tracker_with(FakeSource {
            users: vec![user("realuser", "141981764")],
            ..Default::default()
        });

        tracker.set_logins(["realuser"]);
        tracker.poll().await.unwrap();

        assert_eq!(tracker.user_id("  RealUser "), Some("141981764"));
        assert_eq!(tracker.user_id("ghostuser123456"), None);
    }

    #[tokio::test]
    async fn snapshot_round_trips_through_json() {
        let mut tracker = tracker_with(FakeSource {
            users: vec![user("realuser", "141981764"), user("idleuser", "44322889")],
            streams: vec![live_stream("realuser")],
            ..Default::default()
        });

        tracker.set_cooldown(Duration::seconds(60));
        tracker.set_logins(["realuser", "idleuser"]);
        tracker.poll().await.unwrap();

        // Put realuser into the grace window so the timer map is populated.
        tracker.evaluate_status("realuser".to_owned(), None, time::now());

        let json = tracker.export_json().unwrap();
        let snapshot: TrackerSnapshot = serde_json::from_str(&json).unwrap();
        let mut restored = tracker_with(FakeSource::default());

        restored.restore_snapshot(snapshot).unwrap();

        assert_eq!(restored.logins, tracker.logins);
        assert_eq!(restored.checked_existence, tracker.checked_existence);
        assert_eq!(restored.state_map, tracker.state_map);
        assert_eq!(restored.cooldown, tracker.cooldown);
        assert!(restored.to_check_existence.is_empty());
    }

    #[test]
    fn snapshot_sorts_login_lists() {
        let mut tracker = tracker_with(FakeSource::default());

        tracker.set_logins(["zeta", "alpha", "mid"]);

        let snapshot = tracker.snapshot();

        assert_eq!(snapshot.logins, vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn rejects_unsupported_snapshot_version() {
        let mut snapshot = tracker_with(FakeSource::default()).snapshot();

        snapshot.version = 2;

        let mut tracker = tracker_with(FakeSource::default());

        assert!(matches!(
            tracker.restore_snapshot(snapshot),
            Err(Error::UnsupportedSnapshotVersion(2)),
        ));
    }

    #[tokio::test]
    async fn saves_and_restores_snapshot_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tracker.json");
        let mut tracker = tracker_with(FakeSource::default());

        tracker.set_cooldown(Duration::seconds(30));
        tracker.set_logins(["realuser"]);
        tracker.save_snapshot(&path).await.unwrap();

        let mut restored = tracker_with(FakeSource::default());

        restored.restore_from_file(&path).unwrap();

        assert_eq!(restored.cooldown(), Duration::seconds(30));
        assert!(restored.logins().contains("realuser"));
        assert!(!dir.path().join("tracker.tmp").exists());
    }
}
