mod persistence;
mod priority;
mod report;
mod wizard;
