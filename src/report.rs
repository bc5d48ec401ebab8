use std::sync::{Arc, Mutex};

//------------------------------------------

pub struct Report {
    inner: Mutex<Box<dyn ReportInner + Send>>,
}

pub trait ReportInner {
    fn log(&mut self, txt: &str);
    fn to_stdout(&mut self, txt: &str);
}

impl Report {
    pub fn new(inner: Box<dyn ReportInner + Send>) -> Report {
        Report {
            inner: Mutex::new(inner),
        }
    }

    pub fn info(&self, txt: &str) {
        let mut inner = self.inner.lock().unwrap();
        inner.log(txt)
    }

    pub fn fatal(&self, txt: &str) {
        let mut inner = self.inner.lock().unwrap();
        inner.log(txt)
    }

    // Results go to stdout, everything else to the log.
    pub fn to_stdout(&self, txt: &str) {
        let mut inner = self.inner.lock().unwrap();
        inner.to_stdout(txt)
    }
}

//------------------------------------------

struct SimpleInner {}

impl ReportInner for SimpleInner {
    fn log(&mut self, txt: &str) {
        eprintln!("{}", txt);
    }

    fn to_stdout(&mut self, txt: &str) {
        println!("{}", txt);
    }
}

pub fn mk_simple_report() -> Arc<Report> {
    Arc::new(Report::new(Box::new(SimpleInner {})))
}

//------------------------------------------

#[cfg(test)]
#[derive(Default)]
pub struct Captured {
    pub log: Vec<String>,
    pub stdout: Vec<String>,
}

#[cfg(test)]
struct CaptureInner {
    captured: Arc<Mutex<Captured>>,
}

#[cfg(test)]
impl ReportInner for CaptureInner {
    fn log(&mut self, txt: &str) {
        self.captured.lock().unwrap().log.push(txt.to_string());
    }

    fn to_stdout(&mut self, txt: &str) {
        self.captured.lock().unwrap().stdout.push(txt.to_string());
    }
}

#[cfg(test)]
pub fn mk_capture_report() -> (Arc<Report>, Arc<Mutex<Captured>>) {
    let captured = Arc::new(Mutex::new(Captured::default()));
    let inner = CaptureInner {
        captured: captured.clone(),
    };
    (Arc::new(Report::new(Box::new(inner))), captured)
}

//------------------------------------------


//------------------------------------------
