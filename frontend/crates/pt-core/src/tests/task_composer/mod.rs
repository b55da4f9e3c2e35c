mod due_date;
mod task_fragment;
