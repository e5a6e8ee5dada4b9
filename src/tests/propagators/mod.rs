mod backtrack_checking;
mod forward_checking;
mod strength_ordering;
