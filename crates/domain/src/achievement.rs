use std::{
    collections::{BTreeSet, HashMap},
    sync::{Arc, Mutex, PoisonError, RwLock},
};

use chrono::NaiveDate;
use log::{debug, info, warn};
use strum::IntoEnumIterator;

use crate::{BoxError, UserID};

/// Receives every newly unlocked achievement, e.g. to push a notification.
pub trait AchievementNotifier: Send + Sync {
    fn notify(&self, unlocked: &UnlockedAchievement) -> Result<(), BoxError>;
}

pub trait ProgressObserver: Send + Sync {
    fn name(&self) -> &str;
    fn on_session_completed(
        &self,
        user_id: UserID,
        session: &CompletedSession,
    ) -> Vec<UnlockedAchievement>;
    fn on_weight_changed(
        &self,
        _user_id: UserID,
        _old_kg: f64,
        _new_kg: f64,
    ) -> Vec<UnlockedAchievement> {
        vec![]
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletedSession {
    pub date: NaiveDate,
    pub minutes: u32,
    pub calories: f64,
    pub body_weight_kg: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Workouts,
    Streak,
    Calories,
    Minutes,
    WeightLoss,
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, strum::EnumIter)]
pub enum Achievement {
    FirstWorkout,
    TenWorkouts,
    FiftyWorkouts,
    HundredWorkouts,
    YearOfWorkouts,
    WeekStreak,
    MonthStreak,
    HundredDayStreak,
    CalorieBurner,
    CalorieCrusher,
    CalorieChampion,
    FirstHour,
    TenHours,
    FiftyHours,
    FirstKilogram,
    FiveKilograms,
    TenKilograms,
    TwentyKilograms,
}

impl Achievement {
    #[must_use]
    pub fn metric(self) -> Metric {
        match self {
            Achievement::FirstWorkout
            | Achievement::TenWorkouts
            | Achievement::FiftyWorkouts
            | Achievement::HundredWorkouts
            | Achievement::YearOfWorkouts => Metric::Workouts,
            Achievement::WeekStreak | Achievement::MonthStreak | Achievement::HundredDayStreak => {
                Metric::Streak
            }
            Achievement::CalorieBurner
            | Achievement::CalorieCrusher
            | Achievement::CalorieChampion => Metric::Calories,
            Achievement::FirstHour | Achievement::TenHours | Achievement::FiftyHours => {
                Metric::Minutes
            }
            Achievement::FirstKilogram
            | Achievement::FiveKilograms
            | Achievement::TenKilograms
            | Achievement::TwentyKilograms => Metric::WeightLoss,
        }
    }

    /// Value of the metric at which the achievement unlocks.
    #[must_use]
    pub fn threshold(self) -> f64 {
        match self {
            Achievement::FirstWorkout | Achievement::FirstKilogram => 1.0,
            Achievement::TenWorkouts | Achievement::TenKilograms => 10.0,
            Achievement::FiftyWorkouts => 50.0,
            Achievement::HundredWorkouts | Achievement::HundredDayStreak => 100.0,
            Achievement::YearOfWorkouts => 365.0,
            Achievement::WeekStreak => 7.0,
            Achievement::MonthStreak => 30.0,
            Achievement::CalorieBurner => 1000.0,
            Achievement::CalorieCrusher => 5000.0,
            Achievement::CalorieChampion => 10000.0,
            Achievement::FirstHour => 60.0,
            Achievement::TenHours => 600.0,
            Achievement::FiftyHours => 3000.0,
            Achievement::FiveKilograms => 5.0,
            Achievement::TwentyKilograms => 20.0,
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Achievement::FirstWorkout => "First Step",
            Achievement::TenWorkouts => "Persistent",
            Achievement::FiftyWorkouts => "Training Pro",
            Achievement::HundredWorkouts => "Forged in Steel",
            Achievement::YearOfWorkouts => "Year-Round Warrior",
            Achievement::WeekStreak => "One Week Strong",
            Achievement::MonthStreak => "Monthly Challenger",
            Achievement::HundredDayStreak => "Hundred Days",
            Achievement::CalorieBurner => "Calorie Burner",
            Achievement::CalorieCrusher => "Calorie Crusher",
            Achievement::CalorieChampion => "Calorie Champion",
            Achievement::FirstHour => "Time Keeper",
            Achievement::TenHours => "Training Expert",
            Achievement::FiftyHours => "Time Investor",
            Achievement::FirstKilogram => "First Kilogram",
            Achievement::FiveKilograms => "Five Down",
            Achievement::TenKilograms => "Ten Down",
            Achievement::TwentyKilograms => "Transformation",
        }
    }

    #[must_use]
    pub fn description(self) -> String {
        let threshold = self.threshold();
        match self.metric() {
            Metric::Workouts if threshold > 1.0 => format!("Completed {threshold} workouts"),
            Metric::Workouts => "Completed the first workout".to_string(),
            Metric::Streak => format!("Trained {threshold} days in a row"),
            Metric::Calories => format!("Burned {threshold} kcal in total"),
            Metric::Minutes => format!("Trained {threshold} minutes in total"),
            Metric::WeightLoss => format!("Lost {threshold} kg"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnlockedAchievement {
    pub user_id: UserID,
    pub achievement: Achievement,
}

/// Accumulated progress of one user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserStats {
    pub completed_workouts: u32,
    pub total_minutes: u32,
    pub total_calories: f64,
    pub total_weight_loss_kg: f64,
    pub streak_days: u32,
    pub last_workout: Option<NaiveDate>,
    pub last_body_weight_kg: Option<f64>,
    pub unlocked: BTreeSet<Achievement>,
}

impl UserStats {
    #[must_use]
    pub fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Workouts => f64::from(self.completed_workouts),
            Metric::Streak => f64::from(self.streak_days),
            Metric::Calories => self.total_calories,
            Metric::Minutes => f64::from(self.total_minutes),
            Metric::WeightLoss => self.total_weight_loss_kg,
        }
    }

    fn record_session(&mut self, session: &CompletedSession) {
        self.completed_workouts += 1;
        self.total_minutes += session.minutes;
        self.total_calories += session.calories.max(0.0);
        match self.last_workout.map(|last| (session.date - last).num_days()) {
            // Same day or backdated.
            Some(days) if days <= 0 => {}
            Some(1) => {
                self.streak_days += 1;
                self.last_workout = Some(session.date);
            }
            _ => {
                self.streak_days = 1;
                self.last_workout = Some(session.date);
            }
        }

        if let Some(weight) = session.body_weight_kg {
            if let Some(previous) = self.last_body_weight_kg {
                self.record_weight(previous, weight);
            } else {
                self.last_body_weight_kg = Some(weight);
            }
        }
    }

    fn record_weight(&mut self, old_kg: f64, new_kg: f64) {
        let loss = old_kg - new_kg;
        if loss > 0.0 {
            self.total_weight_loss_kg += loss;
        }
        self.last_body_weight_kg = Some(new_kg);
    }

    /// Marks every achievement whose threshold has been crossed and returns
    /// those that were not unlocked before.
    fn unlock(&mut self, metrics: &[Metric]) -> Vec<Achievement> {
        let reached = Achievement::iter()
            .filter(|a| metrics.contains(&a.metric()))
            .filter(|a| self.value(a.metric()) >= a.threshold())
            .collect::<Vec<_>>();
        reached
            .into_iter()
            .filter(|a| self.unlocked.insert(*a))
            .collect()
    }
}

/// Tracks progress per user and unlocks achievements.
///
/// Events of the same user are applied one after another. Events of
/// different users do not contend.
#[derive(Default)]
pub struct AchievementEngine {
    stats: Mutex<HashMap<UserID, Arc<Mutex<UserStats>>>>,
    notifier: Option<Box<dyn AchievementNotifier>>,
}

impl AchievementEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_notifier(notifier: impl AchievementNotifier + 'static) -> Self {
        Self {
            stats: Mutex::default(),
            notifier: Some(Box::new(notifier)),
        }
    }

    pub fn record_session_completed(
        &self,
        user_id: UserID,
        session: &CompletedSession,
    ) -> Vec<UnlockedAchievement> {
        let achievements = {
            let shard = self.shard(user_id);
            let mut stats = shard.lock().unwrap_or_else(PoisonError::into_inner);
            stats.record_session(session);
            debug!(
                "user {} completed workout {} (streak {})",
                *user_id, stats.completed_workouts, stats.streak_days
            );
            stats.unlock(&[
                Metric::Workouts,
                Metric::Streak,
                Metric::Calories,
                Metric::Minutes,
                Metric::WeightLoss,
            ])
        };
        self.deliver(user_id, achievements)
    }

    /// Adds a positive weight loss to the user's total.
    pub fn record_weight_change(
        &self,
        user_id: UserID,
        old_kg: f64,
        new_kg: f64,
    ) -> Vec<UnlockedAchievement> {
        let achievements = {
            let shard = self.shard(user_id);
            let mut stats = shard.lock().unwrap_or_else(PoisonError::into_inner);
            stats.record_weight(old_kg, new_kg);
            stats.unlock(&[Metric::WeightLoss])
        };
        self.deliver(user_id, achievements)
    }

    #[must_use]
    pub fn stats(&self, user_id: UserID) -> Option<UserStats> {
        let shard = self
            .stats
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&user_id)
            .cloned()?;
        let stats = shard.lock().unwrap_or_else(PoisonError::into_inner).clone();
        Some(stats)
    }

    fn shard(&self, user_id: UserID) -> Arc<Mutex<UserStats>> {
        self.stats
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(user_id)
            .or_default()
            .clone()
    }

    fn deliver(
        &self,
        user_id: UserID,
        achievements: Vec<Achievement>,
    ) -> Vec<UnlockedAchievement> {
        achievements
            .into_iter()
            .map(|achievement| {
                let unlocked = UnlockedAchievement {
                    user_id,
                    achievement,
                };
                info!("user {} unlocked \"{}\"", *user_id, achievement.title());
                if let Some(notifier) = &self.notifier {
                    if let Err(err) = notifier.notify(&unlocked) {
                        warn!("failed to notify achievement \"{}\": {err}", achievement.title());
                    }
                }
                unlocked
            })
            .collect()
    }
}

impl ProgressObserver for AchievementEngine {
    fn name(&self) -> &str {
        "achievements"
    }

    fn on_session_completed(
        &self,
        user_id: UserID,
        session: &CompletedSession,
    ) -> Vec<UnlockedAchievement> {
        self.record_session_completed(user_id, session)
    }

    fn on_weight_changed(
        &self,
        user_id: UserID,
        old_kg: f64,
        new_kg: f64,
    ) -> Vec<UnlockedAchievement> {
        self.record_weight_change(user_id, old_kg, new_kg)
    }
}

/// Fans progress events out to all registered observers.
#[derive(Default)]
pub struct ProgressSubject {
    observers: RwLock<Vec<Arc<dyn ProgressObserver>>>,
}

impl ProgressSubject {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registering the same observer twice has no effect.
    pub fn add_observer(&self, observer: Arc<dyn ProgressObserver>) {
        let mut observers = self.observers.write().unwrap_or_else(PoisonError::into_inner);
        if !observers.iter().any(|o| Arc::ptr_eq(o, &observer)) {
            debug!("added progress observer {}", observer.name());
            observers.push(observer);
        }
    }

    pub fn remove_observer(&self, observer: &Arc<dyn ProgressObserver>) {
        self.observers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .retain(|o| !Arc::ptr_eq(o, observer));
    }

    #[must_use]
    pub fn observer_names(&self) -> Vec<String> {
        self.observers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|o| o.name().to_string())
            .collect()
    }

    pub fn notify_session_completed(
        &self,
        user_id: UserID,
        session: &CompletedSession,
    ) -> Vec<UnlockedAchievement> {
        self.observers()
            .iter()
            .flat_map(|o| o.on_session_completed(user_id, session))
            .collect()
    }

    pub fn notify_weight_changed(
        &self,
        user_id: UserID,
        old_kg: f64,
        new_kg: f64,
    ) -> Vec<UnlockedAchievement> {
        self.observers()
            .iter()
            .flat_map(|o| o.on_weight_changed(user_id, old_kg, new_kg))
            .collect()
    }

    fn observers(&self) -> Vec<Arc<dyn ProgressObserver>> {
        self.observers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    const USER: UserID = UserID::nil();

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 1, 1).unwrap() + chrono::Days::new(u64::from(day))
    }

    fn session(day: u32) -> CompletedSession {
        CompletedSession {
            date: date(day),
            minutes: 30,
            calories: 100.0,
            body_weight_kg: None,
        }
    }

    fn achievements(unlocked: &[UnlockedAchievement]) -> Vec<Achievement> {
        unlocked.iter().map(|u| u.achievement).collect()
    }

    #[test]
    fn test_achievement_table() {
        let thresholds = |metric| {
            Achievement::iter()
                .filter(|a| a.metric() == metric)
                .map(Achievement::threshold)
                .collect::<Vec<_>>()
        };
        assert_eq!(thresholds(Metric::Workouts), vec![1.0, 10.0, 50.0, 100.0, 365.0]);
        assert_eq!(thresholds(Metric::Streak), vec![7.0, 30.0, 100.0]);
        assert_eq!(thresholds(Metric::Calories), vec![1000.0, 5000.0, 10000.0]);
        assert_eq!(thresholds(Metric::Minutes), vec![60.0, 600.0, 3000.0]);
        assert_eq!(thresholds(Metric::WeightLoss), vec![1.0, 5.0, 10.0, 20.0]);
    }

    #[rstest]
    #[case(Achievement::FirstWorkout, "Completed the first workout")]
    #[case(Achievement::TenWorkouts, "Completed 10 workouts")]
    #[case(Achievement::WeekStreak, "Trained 7 days in a row")]
    #[case(Achievement::TenKilograms, "Lost 10 kg")]
    fn test_achievement_description(#[case] achievement: Achievement, #[case] expected: &str) {
        assert_eq!(achievement.description(), expected);
    }

    #[test]
    fn test_first_session() {
        let engine = AchievementEngine::new();

        let unlocked = engine.record_session_completed(USER, &session(0));

        assert_eq!(achievements(&unlocked), vec![Achievement::FirstWorkout]);
        assert_eq!(unlocked[0].user_id, USER);
        let stats = engine.stats(USER).unwrap();
        assert_eq!(stats.completed_workouts, 1);
        assert_eq!(stats.streak_days, 1);
        assert_eq!(stats.total_minutes, 30);
        assert_eq!(stats.last_workout, Some(date(0)));
    }

    #[test]
    fn test_stats_of_unknown_user() {
        assert_eq!(AchievementEngine::new().stats(USER), None);
    }

    #[test]
    fn test_minutes_threshold() {
        let engine = AchievementEngine::new();
        engine.record_session_completed(USER, &session(0));

        let unlocked = engine.record_session_completed(USER, &session(1));

        assert_eq!(achievements(&unlocked), vec![Achievement::FirstHour]);
    }

    #[test]
    fn test_crossing_several_thresholds_at_once() {
        let engine = AchievementEngine::new();

        let unlocked = engine.record_session_completed(
            USER,
            &CompletedSession {
                calories: 5500.0,
                minutes: 700,
                ..session(0)
            },
        );

        assert_eq!(
            achievements(&unlocked),
            vec![
                Achievement::FirstWorkout,
                Achievement::CalorieBurner,
                Achievement::CalorieCrusher,
                Achievement::FirstHour,
                Achievement::TenHours,
            ]
        );
    }

    #[test]
    fn test_streak() {
        let engine = AchievementEngine::new();
        let mut unlocked = vec![];

        for day in 0..7 {
            unlocked.extend(engine.record_session_completed(USER, &session(day)));
        }

        assert_eq!(engine.stats(USER).unwrap().streak_days, 7);
        assert!(achievements(&unlocked).contains(&Achievement::WeekStreak));
    }

    #[rstest]
    #[case(10, 1, 10)]
    #[case(11, 2, 11)]
    #[case(12, 1, 12)]
    #[case(40, 1, 40)]
    #[case(0, 1, 10)]
    fn test_streak_gap(
        #[case] next_day: u32,
        #[case] expected_streak: u32,
        #[case] expected_last_day: u32,
    ) {
        let engine = AchievementEngine::new();
        engine.record_session_completed(USER, &session(10));
        engine.record_session_completed(USER, &session(next_day));

        let stats = engine.stats(USER).unwrap();
        assert_eq!(stats.streak_days, expected_streak);
        assert_eq!(stats.last_workout, Some(date(expected_last_day)));
        assert_eq!(stats.completed_workouts, 2);
    }

    #[test]
    fn test_several_sessions_on_one_day() {
        let engine = AchievementEngine::new();
        let mut unlocked = vec![];

        for _ in 0..7 {
            unlocked.extend(engine.record_session_completed(USER, &session(0)));
        }

        assert_eq!(engine.stats(USER).unwrap().streak_days, 1);
        assert!(!achievements(&unlocked).contains(&Achievement::WeekStreak));
    }

    #[test]
    fn test_unlocked_only_once() {
        let engine = AchievementEngine::new();
        let mut unlocked = vec![];

        for day in 0..20 {
            unlocked.extend(engine.record_session_completed(USER, &session(day * 3)));
        }

        let first_workouts = unlocked
            .iter()
            .filter(|u| u.achievement == Achievement::FirstWorkout)
            .count();
        assert_eq!(first_workouts, 1);
        assert_eq!(
            unlocked
                .iter()
                .filter(|u| u.achievement == Achievement::TenWorkouts)
                .count(),
            1
        );
        assert!(!achievements(&unlocked).contains(&Achievement::WeekStreak));
    }

    #[test]
    fn test_record_weight_change() {
        let engine = AchievementEngine::new();

        assert_eq!(
            achievements(&engine.record_weight_change(USER, 80.0, 78.5)),
            vec![Achievement::FirstKilogram]
        );
        assert_eq!(engine.record_weight_change(USER, 78.5, 80.0), vec![]);
        assert_eq!(
            achievements(&engine.record_weight_change(USER, 80.0, 76.0)),
            vec![Achievement::FiveKilograms]
        );
        assert_eq!(engine.stats(USER).unwrap().total_weight_loss_kg, 5.5);
        assert_eq!(engine.stats(USER).unwrap().completed_workouts, 0);
    }

    #[test]
    fn test_session_body_weight() {
        let engine = AchievementEngine::new();
        engine.record_session_completed(
            USER,
            &CompletedSession {
                body_weight_kg: Some(90.0),
                ..session(0)
            },
        );

        let unlocked = engine.record_session_completed(
            USER,
            &CompletedSession {
                body_weight_kg: Some(88.0),
                ..session(1)
            },
        );

        assert!(achievements(&unlocked).contains(&Achievement::FirstKilogram));
        assert_eq!(engine.stats(USER).unwrap().last_body_weight_kg, Some(88.0));
    }

    struct FailingNotifier(Arc<AtomicUsize>);

    impl AchievementNotifier for FailingNotifier {
        fn notify(&self, _: &UnlockedAchievement) -> Result<(), BoxError> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Err("unreachable".into())
        }
    }

    #[test]
    fn test_notifier_failure_is_swallowed() {
        let calls = Arc::new(AtomicUsize::new(0));
        let engine = AchievementEngine::with_notifier(FailingNotifier(calls.clone()));

        let unlocked = engine.record_session_completed(USER, &session(0));

        assert_eq!(achievements(&unlocked), vec![Achievement::FirstWorkout]);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_concurrent_sessions() {
        let engine = AchievementEngine::new();
        let other = UserID::from(2);

        let unlocked = std::thread::scope(|s| {
            let handles = (0..8)
                .map(|i| {
                    let engine = &engine;
                    let user = if i % 2 == 0 { USER } else { other };
                    s.spawn(move || {
                        (0..10)
                            .flat_map(|_| engine.record_session_completed(user, &session(0)))
                            .collect::<Vec<_>>()
                    })
                })
                .collect::<Vec<_>>();
            handles
                .into_iter()
                .flat_map(|h| h.join().unwrap())
                .collect::<Vec<_>>()
        });

        for user in [USER, other] {
            assert_eq!(engine.stats(user).unwrap().completed_workouts, 40);
            for achievement in [Achievement::FirstWorkout, Achievement::TenWorkouts] {
                assert_eq!(
                    unlocked
                        .iter()
                        .filter(|u| u.user_id == user && u.achievement == achievement)
                        .count(),
                    1
                );
            }
        }
    }

    struct Counter(AtomicUsize);

    impl ProgressObserver for Counter {
        fn name(&self) -> &str {
            "counter"
        }

        fn on_session_completed(
            &self,
            _: UserID,
            _: &CompletedSession,
        ) -> Vec<UnlockedAchievement> {
            self.0.fetch_add(1, Ordering::SeqCst);
            vec![]
        }
    }

    #[test]
    fn test_progress_subject() {
        let subject = ProgressSubject::new();
        let engine: Arc<dyn ProgressObserver> = Arc::new(AchievementEngine::new());
        let counter = Arc::new(Counter(AtomicUsize::new(0)));
        let counter_observer: Arc<dyn ProgressObserver> = counter.clone();

        subject.add_observer(engine.clone());
        subject.add_observer(engine.clone());
        subject.add_observer(counter_observer.clone());

        assert_eq!(subject.observer_names(), vec!["achievements", "counter"]);

        let unlocked = subject.notify_session_completed(USER, &session(0));
        assert_eq!(achievements(&unlocked), vec![Achievement::FirstWorkout]);
        assert_eq!(
            achievements(&subject.notify_weight_changed(USER, 70.0, 68.0)),
            vec![Achievement::FirstKilogram]
        );

        subject.remove_observer(&counter_observer);
        subject.notify_session_completed(USER, &session(1));

        assert_eq!(counter.0.load(Ordering::SeqCst), 1);
        assert_eq!(subject.observer_names(), vec!["achievements"]);
    }
}
