use crate::cli::parser::Commands;
use crate::errors::{AppError, AppResult};
use crate::models::field::Field;
use crate::ui::messages::header;
use crate::utils::table::{Column, Table};

/// Without a field: the field catalogue. With one: its allowed values.
pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Options { field, section } = cmd {
        match field {
            Some(name) => {
                let f = Field::from_name(name).ok_or_else(|| AppError::UnknownField(name.clone()))?;

                header(f.label());
                match f.options() {
                    Some(values) => values.iter().for_each(|v| println!("{}", v)),
                    None => println!("(free value)"),
                }
            }
            None => {
                let fields: Vec<Field> = match section {
                    Some(s) => [Field::DepthFrom, Field::DepthTo]
                        .into_iter()
                        .chain(s.columns().iter().copied())
                        .collect(),
                    None => Field::all(),
                };

                let mut table = Table::new(vec![
                    Column::new("FIELD", 24),
                    Column::new("LABEL", 24),
                    Column::new("VALUES", 6),
                ]);
                for f in fields {
                    let values = f
                        .options()
                        .map(|o| o.len().to_string())
                        .unwrap_or_else(|| "-".into());
                    table.add_row(vec![f.name().to_string(), f.label().to_string(), values]);
                }
                print!("{}", table.render());
            }
        }
    }
    Ok(())
}
