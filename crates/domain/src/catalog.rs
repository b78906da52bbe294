use crate::{Equipment, FitnessLevel, MuscleGroup};

pub(crate) const WARM_UP_CARDIO: [&str; 2] = ["Brisk Walk", "Marching in Place"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Impact {
    Low,
    Moderate,
    High,
}

#[derive(Debug)]
pub struct StrengthTemplate {
    pub name: &'static str,
    pub description: &'static str,
    pub muscle: MuscleGroup,
    pub secondary_muscles: &'static [MuscleGroup],
    pub equipment: Equipment,
    pub calories_per_minute: f64,
    pub instructions: &'static str,
}

#[derive(Debug)]
pub struct CardioTemplate {
    pub name: &'static str,
    pub description: &'static str,
    pub equipment: Equipment,
    pub calories_per_minute: f64,
    pub impact: Impact,
    pub instructions: &'static str,
}

/// A timed block outside the interval rounds.
#[derive(Debug)]
pub struct HiitBlock {
    pub name: &'static str,
    pub description: &'static str,
    pub seconds: u32,
}

#[derive(Debug)]
pub struct Pose {
    pub name: &'static str,
    pub description: &'static str,
    pub hold_minutes: u32,
}

pub const STRENGTH_EXERCISES: [StrengthTemplate; 12] = [
    StrengthTemplate {
        name: "Squat",
        description: "The king of lower-body strength exercises",
        muscle: MuscleGroup::Legs,
        secondary_muscles: &[MuscleGroup::Glutes, MuscleGroup::Core],
        equipment: Equipment::None,
        calories_per_minute: 8.0,
        instructions: "Stand with feet shoulder-width apart and toes turned slightly out. Keep the back straight and the knees behind the toes while lowering.",
    },
    StrengthTemplate {
        name: "Deadlift",
        description: "Full-body lift focusing on the posterior chain",
        muscle: MuscleGroup::Back,
        secondary_muscles: &[MuscleGroup::Legs, MuscleGroup::Glutes],
        equipment: Equipment::Barbell,
        calories_per_minute: 10.0,
        instructions: "Stand with feet hip-width apart and grip the bar slightly wider than the shoulders. Keep the back straight and drive with the hips.",
    },
    StrengthTemplate {
        name: "Bench Press",
        description: "Classic chest strength exercise",
        muscle: MuscleGroup::Chest,
        secondary_muscles: &[MuscleGroup::Shoulders, MuscleGroup::Arms],
        equipment: Equipment::Barbell,
        calories_per_minute: 9.0,
        instructions: "Lie on the bench and grip the bar slightly wider than the shoulders. Lower it to the chest, then press until the arms are straight.",
    },
    StrengthTemplate {
        name: "Pull-Up",
        description: "Back and arm strength exercise",
        muscle: MuscleGroup::Back,
        secondary_muscles: &[MuscleGroup::Arms],
        equipment: Equipment::PullUpBar,
        calories_per_minute: 7.5,
        instructions: "Hang from the bar and pull the body up with the back and arms until the chin clears the bar.",
    },
    StrengthTemplate {
        name: "Shoulder Press",
        description: "Shoulder strength exercise",
        muscle: MuscleGroup::Shoulders,
        secondary_muscles: &[MuscleGroup::Arms],
        equipment: Equipment::Dumbbells,
        calories_per_minute: 6.5,
        instructions: "Press the dumbbells overhead from shoulder height without arching the lower back.",
    },
    StrengthTemplate {
        name: "Biceps Curl",
        description: "Biceps strength exercise",
        muscle: MuscleGroup::Arms,
        secondary_muscles: &[],
        equipment: Equipment::Dumbbells,
        calories_per_minute: 4.0,
        instructions: "Keep the elbows close to the body and curl the dumbbells without swinging.",
    },
    StrengthTemplate {
        name: "Triceps Extension",
        description: "Triceps strength exercise",
        muscle: MuscleGroup::Arms,
        secondary_muscles: &[],
        equipment: Equipment::Dumbbells,
        calories_per_minute: 5.0,
        instructions: "Hold the dumbbell overhead and lower it behind the head by bending only the elbows.",
    },
    StrengthTemplate {
        name: "Lunge",
        description: "Single-leg strength and balance exercise",
        muscle: MuscleGroup::Legs,
        secondary_muscles: &[MuscleGroup::Glutes],
        equipment: Equipment::Dumbbells,
        calories_per_minute: 7.0,
        instructions: "Step forward and lower the back knee towards the floor while keeping the torso upright.",
    },
    StrengthTemplate {
        name: "Plank",
        description: "Core strength exercise",
        muscle: MuscleGroup::Core,
        secondary_muscles: &[MuscleGroup::Shoulders],
        equipment: Equipment::None,
        calories_per_minute: 5.0,
        instructions: "Hold a straight line from head to heels on the forearms and keep the core braced.",
    },
    StrengthTemplate {
        name: "Russian Twist",
        description: "Oblique strength exercise",
        muscle: MuscleGroup::Core,
        secondary_muscles: &[],
        equipment: Equipment::Kettlebell,
        calories_per_minute: 6.0,
        instructions: "Sit with the feet off the floor and rotate the kettlebell from side to side.",
    },
    StrengthTemplate {
        name: "Push-Up",
        description: "Bodyweight chest exercise",
        muscle: MuscleGroup::Chest,
        secondary_muscles: &[MuscleGroup::Shoulders, MuscleGroup::Arms, MuscleGroup::Core],
        equipment: Equipment::None,
        calories_per_minute: 7.0,
        instructions: "Keep the body in a straight line and lower the chest to just above the floor.",
    },
    StrengthTemplate {
        name: "Glute Bridge",
        description: "Hip extension exercise for the glutes",
        muscle: MuscleGroup::Glutes,
        secondary_muscles: &[MuscleGroup::Legs, MuscleGroup::Core],
        equipment: Equipment::ResistanceBands,
        calories_per_minute: 5.0,
        instructions: "Lie on the back with a band above the knees and drive the hips up by squeezing the glutes.",
    },
];

pub const CARDIO_EXERCISES: [CardioTemplate; 10] = [
    CardioTemplate {
        name: "Running",
        description: "Classic aerobic exercise for heart and lung fitness",
        equipment: Equipment::None,
        calories_per_minute: 12.0,
        impact: Impact::Moderate,
        instructions: "Keep a steady pace and breathing rhythm. Land on the midfoot rather than the heel.",
    },
    CardioTemplate {
        name: "Brisk Walk",
        description: "Low-intensity aerobic exercise suitable for beginners",
        equipment: Equipment::None,
        calories_per_minute: 6.0,
        impact: Impact::Low,
        instructions: "Walk at a pace that raises the heart rate while still allowing conversation.",
    },
    CardioTemplate {
        name: "Jump Rope",
        description: "Efficient fat-burning aerobic exercise",
        equipment: Equipment::None,
        calories_per_minute: 15.0,
        impact: Impact::High,
        instructions: "Jump lightly with slightly bent knees and turn the rope from the wrists.",
    },
    CardioTemplate {
        name: "Jumping Jacks",
        description: "Full-body aerobic exercise",
        equipment: Equipment::None,
        calories_per_minute: 10.0,
        impact: Impact::Moderate,
        instructions: "Jump the feet apart while raising the arms overhead and keep the core tight.",
    },
    CardioTemplate {
        name: "High Knees",
        description: "Lower-body aerobic drill",
        equipment: Equipment::None,
        calories_per_minute: 8.0,
        impact: Impact::Moderate,
        instructions: "Run in place and drive the knees up to hip height.",
    },
    CardioTemplate {
        name: "Burpees",
        description: "High-intensity full-body aerobic exercise",
        equipment: Equipment::None,
        calories_per_minute: 18.0,
        impact: Impact::High,
        instructions: "Squat, kick back into a push-up, return and jump in one fluid movement.",
    },
    CardioTemplate {
        name: "Mountain Climbers",
        description: "Core-focused aerobic exercise",
        equipment: Equipment::None,
        calories_per_minute: 12.0,
        impact: Impact::Moderate,
        instructions: "From a plank, drive the knees towards the chest one after the other.",
    },
    CardioTemplate {
        name: "Marching in Place",
        description: "Simple aerobic exercise",
        equipment: Equipment::None,
        calories_per_minute: 7.0,
        impact: Impact::Low,
        instructions: "March on the spot and swing the arms in rhythm.",
    },
    CardioTemplate {
        name: "Elliptical",
        description: "Low-impact aerobic exercise",
        equipment: Equipment::Treadmill,
        calories_per_minute: 10.0,
        impact: Impact::Low,
        instructions: "Keep an upright posture and push through the whole foot.",
    },
    CardioTemplate {
        name: "Stationary Bike",
        description: "Lower-body aerobic exercise",
        equipment: Equipment::StationaryBike,
        calories_per_minute: 11.0,
        impact: Impact::Low,
        instructions: "Adjust the saddle to hip height and keep a steady cadence.",
    },
];

pub const HIIT_WARM_UP: [HiitBlock; 2] = [
    HiitBlock {
        name: "Dynamic Warm-Up",
        description: "Full-body joint mobility",
        seconds: 300,
    },
    HiitBlock {
        name: "Easy Hops",
        description: "Light hops in place",
        seconds: 30,
    },
];

pub const HIIT_EXERCISES: [&str; 8] = [
    "Burpees",
    "High Knees",
    "Jumping Jacks",
    "Mountain Run",
    "Squat Jumps",
    "Push-Ups",
    "Plank",
    "Mountain Climbers",
];

pub const HIIT_REST: &str = "Rest";

pub const HIIT_COOL_DOWN: [HiitBlock; 2] = [
    HiitBlock {
        name: "Recovery Walk",
        description: "Slow walk to bring the heart rate down",
        seconds: 180,
    },
    HiitBlock {
        name: "Full-Body Stretch",
        description: "Stretch all major muscle groups",
        seconds: 300,
    },
];

const BEGINNER_YOGA: [Pose; 9] = [
    Pose {
        name: "Mountain Pose",
        description: "Basic standing posture that builds body awareness",
        hold_minutes: 2,
    },
    Pose {
        name: "Standing Forward Fold",
        description: "Gentle forward bend stretching the back",
        hold_minutes: 3,
    },
    Pose {
        name: "Downward Dog",
        description: "Classic inverted V stretching the whole body",
        hold_minutes: 3,
    },
    Pose {
        name: "Child's Pose",
        description: "Kneeling resting posture",
        hold_minutes: 2,
    },
    Pose {
        name: "Cat-Cow",
        description: "Spinal mobility flow",
        hold_minutes: 2,
    },
    Pose {
        name: "Warrior I",
        description: "Combines strength and balance",
        hold_minutes: 2,
    },
    Pose {
        name: "Triangle Pose",
        description: "Lateral stretch",
        hold_minutes: 2,
    },
    Pose {
        name: "Tree Pose",
        description: "Single-leg balance",
        hold_minutes: 1,
    },
    Pose {
        name: "Corpse Pose",
        description: "Final relaxation",
        hold_minutes: 5,
    },
];

const INTERMEDIATE_YOGA: [Pose; 9] = [
    Pose {
        name: "Sun Salutation A",
        description: "Flowing warm-up sequence",
        hold_minutes: 5,
    },
    Pose {
        name: "Warrior II",
        description: "Builds leg strength",
        hold_minutes: 2,
    },
    Pose {
        name: "Extended Side Angle",
        description: "Deep lateral stretch",
        hold_minutes: 2,
    },
    Pose {
        name: "Reverse Warrior",
        description: "Chest-opening side bend",
        hold_minutes: 2,
    },
    Pose {
        name: "Eagle Pose",
        description: "Balance and focus",
        hold_minutes: 1,
    },
    Pose {
        name: "Revolved Triangle",
        description: "Spinal twist",
        hold_minutes: 2,
    },
    Pose {
        name: "Camel Pose",
        description: "Chest-opening backbend",
        hold_minutes: 1,
    },
    Pose {
        name: "Seated Forward Fold",
        description: "Deep forward bend",
        hold_minutes: 3,
    },
    Pose {
        name: "Corpse Pose",
        description: "Deep relaxation",
        hold_minutes: 8,
    },
];

const ADVANCED_YOGA: [Pose; 9] = [
    Pose {
        name: "Sun Salutation B",
        description: "Complete flowing sequence",
        hold_minutes: 8,
    },
    Pose {
        name: "Warrior III",
        description: "Advanced balance posture",
        hold_minutes: 1,
    },
    Pose {
        name: "Dancer Pose",
        description: "Backbend balance challenge",
        hold_minutes: 1,
    },
    Pose {
        name: "Crow Pose",
        description: "Arm balance",
        hold_minutes: 1,
    },
    Pose {
        name: "Headstand",
        description: "The king of inversions",
        hold_minutes: 3,
    },
    Pose {
        name: "Wheel Pose",
        description: "Deep backbend",
        hold_minutes: 1,
    },
    Pose {
        name: "Lotus Twist",
        description: "Deep spinal twist",
        hold_minutes: 2,
    },
    Pose {
        name: "Paschimottanasana",
        description: "Deep seated forward bend",
        hold_minutes: 3,
    },
    Pose {
        name: "Corpse Pose",
        description: "Complete relaxation",
        hold_minutes: 10,
    },
];

/// The yoga sequence of a level. The sequence itself encodes the difficulty.
#[must_use]
pub fn yoga_sequence(level: FitnessLevel) -> &'static [Pose; 9] {
    match level {
        FitnessLevel::Beginner => &BEGINNER_YOGA,
        FitnessLevel::Intermediate => &INTERMEDIATE_YOGA,
        FitnessLevel::Advanced => &ADVANCED_YOGA,
    }
}
