use std::fmt::Write;

use anyhow::{anyhow, bail};
use repwise_domain::{
    self as domain, ExperienceLevel, Goal, KnowledgeRepository, KnowledgeService, MuscleGroup,
};

pub fn exercise<R: KnowledgeRepository>(
    service: &KnowledgeService<R>,
    name: &str,
) -> anyhow::Result<String> {
    let Some(exercise) = service.find_exercise(name) else {
        if service.is_using_fallback() {
            bail!("knowledge base unavailable, cannot look up \"{name}\"");
        }
        bail!("unknown exercise \"{name}\"");
    };

    let mut output = String::new();
    writeln!(output, "{} ({})", exercise.name, exercise.kind())?;
    writeln!(output, "  {}", exercise.summary())?;
    for (aspect, rating) in [
        ("hypertrophy", exercise.effectiveness.hypertrophy_rating()),
        ("strength", exercise.effectiveness.strength_rating()),
        ("power", exercise.effectiveness.power_rating()),
    ] {
        writeln!(output, "  {aspect:<12} {rating} ({}/4)", rating.score())?;
    }
    writeln!(output, "  {:<12} {}", "safety", exercise.safety())?;
    for (label, text) in [
        ("equipment", &exercise.equipment),
        ("requires", &exercise.prerequisites),
        ("progression", &exercise.progression),
    ] {
        if !text.is_empty() {
            writeln!(output, "  {label:<12} {}", domain::sanitize::sanitize(text))?;
        }
    }
    Ok(output)
}

pub fn volume<R: KnowledgeRepository>(
    service: &KnowledgeService<R>,
    muscle_group: &MuscleGroup,
    goal: Goal,
    level: ExperienceLevel,
) -> anyhow::Result<String> {
    let landmarks = service
        .volume_landmarks(muscle_group, goal, level)
        .ok_or_else(|| anyhow!("no volume guidelines for {muscle_group} / {goal} / {level}"))?;
    let sets_per_week = landmarks.sets_per_week_range();
    let sets_per_session = landmarks.sets_per_session_range();
    let reps = landmarks.reps_range();

    let mut output = String::new();
    writeln!(output, "{muscle_group} ({goal}, {level})")?;
    writeln!(output, "  MEV            {}", landmarks.minimum_effective_volume)?;
    writeln!(output, "  MAV            {}", landmarks.maximum_adaptive_volume)?;
    writeln!(output, "  MRV            {}", landmarks.maximum_recoverable_volume)?;
    writeln!(
        output,
        "  sets per week  {}-{}",
        sets_per_week.start(),
        sets_per_week.end()
    )?;
    writeln!(
        output,
        "  sets/session   {}-{}",
        sets_per_session.start(),
        sets_per_session.end()
    )?;
    writeln!(output, "  reps           {}-{}", reps.start(), reps.end())?;
    if !landmarks.rest_period.is_empty() {
        writeln!(output, "  rest           {}", landmarks.rest_period)?;
    }
    if !landmarks.notes.is_empty() {
        writeln!(
            output,
            "  {}",
            domain::sanitize::sanitize(&landmarks.notes)
        )?;
    }
    Ok(output)
}

pub fn substitutes<R: KnowledgeRepository>(
    service: &KnowledgeService<R>,
    muscle_group: &MuscleGroup,
    scenario: Option<&str>,
) -> anyhow::Result<String> {
    let mut output = String::new();

    if let Some(scenario) = scenario {
        let substitution = service
            .find_substitution(muscle_group, scenario)
            .ok_or_else(|| anyhow!("no substitution for \"{scenario}\" ({muscle_group})"))?;
        writeln!(output, "{}", substitution.substitute)?;
        writeln!(output, "  {}", domain::sanitize::sanitize(&substitution.rationale))?;
        return Ok(output);
    }

    let selection = service
        .exercise_selection(muscle_group)
        .ok_or_else(|| anyhow!("unknown muscle group \"{muscle_group}\""))?;
    for substitution in &selection.substitutions {
        writeln!(
            output,
            "{}: {}",
            substitution.scenario, substitution.substitute
        )?;
    }
    Ok(output)
}

pub fn exercises<R: KnowledgeRepository>(
    service: &KnowledgeService<R>,
    muscle_group: &MuscleGroup,
) -> anyhow::Result<String> {
    let selection = service
        .exercise_selection(muscle_group)
        .ok_or_else(|| anyhow!("unknown muscle group \"{muscle_group}\""))?;

    let mut output = String::new();
    for (title, exercises) in [
        ("Compound", &selection.compound),
        ("Accessory", &selection.accessory),
    ] {
        writeln!(output, "{title}")?;
        for exercise in exercises {
            writeln!(output, "  {}", exercise.name)?;
        }
    }
    Ok(output)
}

pub fn muscle_groups<R: KnowledgeRepository>(service: &KnowledgeService<R>) -> String {
    service
        .muscle_groups()
        .iter()
        .map(|m| format!("{m}\n"))
        .collect()
}

pub fn principles<R: KnowledgeRepository>(
    service: &KnowledgeService<R>,
) -> anyhow::Result<String> {
    let mut output = String::new();
    if service.is_using_fallback() {
        writeln!(output, "(knowledge base unavailable, showing general guidance)\n")?;
    }
    for (title, text) in service.general_principles().sections() {
        writeln!(output, "{title}")?;
        writeln!(output, "  {}", domain::sanitize::sanitize(text))?;
    }
    Ok(output)
}

pub fn sanitize(text: &str, first_sentence: bool) -> String {
    if first_sentence {
        domain::sanitize::first_sentence(text)
    } else {
        domain::sanitize::sanitize(text)
    }
}
