use anyhow::*;

mod app;
mod output;
mod quiz;

fn main() -> Result<()> {
    pretty_env_logger::init();

    let definition =
        quiz::definition::QuizDefinition::builtin().context("Could not load the question bank")?;
    app::run(definition)
}
