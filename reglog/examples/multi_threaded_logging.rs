use std::sync::{Arc, mpsc::channel};

use reglog::{Registry, reglog_info, reglog_warning};

fn main() {
    let registry = Arc::new(Registry::new());
    // the main thread and each worker get their own file under /tmp
    registry.build("reglog_main.log", "/tmp/").unwrap();
    registry
        .get("reglog_main.log")
        .unwrap()
        .set_header_format("[%D{%Y-%m-%dT%H:%M:%S.%q}][%S] M:L - ");
    reglog_info!(registry, "reglog_main.log", "Hello, world!").unwrap();

    let (handles, senders): (Vec<_>, Vec<_>) = (0..5)
        .map(|i| {
            let name = format!("reglog_thread_{i}.log");
            registry.build(&name, "/tmp/").unwrap();
            registry
                .get(&name)
                .unwrap()
                .set_header_format("[%D{%H:%M:%S.%q}][%S] - ");
            let (sender, receiver) = channel::<&'static str>();
            let registry = Arc::clone(&registry);
            let handle = std::thread::spawn(move || {
                for message in receiver {
                    reglog_warning!(registry, &name, "MESSAGE RECEIVED: {message}").unwrap();
                }
            });
            (handle, sender)
        })
        .unzip();
    for sender in senders {
        sender.send("Hello, world!").unwrap();
    }
    for handle in handles {
        handle.join().unwrap();
    }
    for i in 0..5 {
        let path = format!("/tmp/reglog_thread_{i}.log");
        let content = std::fs::read_to_string(&path).unwrap();
        println!("last line of {path} is:\n\t{}", content.lines().last().unwrap());
        registry.destroy(&format!("reglog_thread_{i}.log")).unwrap();
    }
    println!("loggers still registered: {:?}", registry.names());
}
