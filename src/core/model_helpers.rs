use crate::core::Grid;

impl Grid {
    pub fn is_solved(&self) -> bool {
        for row in &self.cells {
            for &lit in row {
                if lit {
                    return false;
                }
            }
        }
        true
    }

    pub fn height(&self) -> i32 {
        self.cells.len() as i32
    }

    pub fn width(&self) -> i32 {
        if self.cells.is_empty() {
            0
        } else {
            self.cells[0].len() as i32
        }
    }

    pub fn lit_count(&self) -> usize {
        let mut count = 0;
        for row in &self.cells {
            for &lit in row {
                if lit {
                    count += 1;
                }
            }
        }
        count
    }
}
