use std::io::{stdout, Stdout, Write};

use crossterm::{cursor, terminal, ExecutableCommand};

use super::car_status::CarStatus;

pub struct Debug {
    stdout: Stdout,
    num_floors: u8,
    drawn: bool,
}

impl Debug {
    pub fn new(num_floors: u8) -> Self {
        Debug {
            stdout: stdout(),
            num_floors: num_floors,
            drawn: false,
        }
    }

    fn status_size(&self) -> u16 {
        // header rows, two per floor, and the state table
        6 + 2 * self.num_floors as u16 + 9
    }

    pub fn printstatus(&mut self, status: &CarStatus) -> std::io::Result<()> {
        if self.drawn {
            let size = self.status_size();
            self.stdout.execute(cursor::MoveUp(size))?;
            self.stdout.execute(terminal::Clear(terminal::ClearType::FromCursorDown))?;
        }
        self.drawn = true;

        writeln!(self.stdout, "+-------------------------+")?;
        writeln!(self.stdout, "| PENDING REQUESTS        |")?;
        writeln!(self.stdout, "+------------+------------+")?;
        writeln!(self.stdout, "| {0:<10} | {1:<10} |", "FLOOR", "PENDING")?;
        for floor in (0..self.num_floors).rev() {
            writeln!(self.stdout, "+------------+------------+")?;
            writeln!(self.stdout, "| {0:<10} | {1:<10} |", floor, status.pending.is_pending(floor))?;
        }
        writeln!(self.stdout, "+------------+------------+\n")?;

        let occupant = match &status.occupant {
            Some(agent) => agent.name().to_string(),
            None => String::from("-"),
        };
        writeln!(self.stdout, "+-------------------------+")?;
        writeln!(self.stdout, "| CAR                     |")?;
        writeln!(self.stdout, "+------------+------------+")?;
        writeln!(self.stdout, "| {0:<10} | {1:<10} |", "STATE", status.behaviour.as_string())?;
        writeln!(self.stdout, "+------------+------------+")?;
        writeln!(self.stdout, "| {0:<10} | {1:<10} |", "FLOOR", status.floor)?;
        writeln!(self.stdout, "+------------+------------+")?;
        writeln!(self.stdout, "| {0:<10} | {1:<10} |", "OCCUPANT", occupant)?;
        writeln!(self.stdout, "+------------+------------+")?;

        self.stdout.flush()
    }
}
