mod capacity;
mod sync;
