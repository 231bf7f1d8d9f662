use crate::errors::AppResult;
use crate::ui::intro;
use crate::ui::messages::header;

pub fn handle() -> AppResult<()> {
    header("Grocery basket CO2 emissions");
    print!("{}", intro::render(80));
    Ok(())
}
