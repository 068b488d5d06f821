use leptos::prelude::*;

/// True when the app is served from a static demo host with no backend
/// behind it (GitHub Pages).
pub fn is_static_demo_host(hostname: &str) -> bool {
    hostname.ends_with(".github.io")
}

/// Static banner explaining that data persistence is disabled on the
/// demo host.
#[component]
pub fn DemoNotice() -> impl IntoView {
    view! {
        <div class="demo-notice">
            <p class="demo-notice__text">
                <strong>{"Static Demo Mode"}</strong>
                <br />
                {"The backend API is not available on this host, so data persistence is disabled. "}
                {"Run the app locally with the backend to create customers and orders."}
            </p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn github_pages_host_is_demo() {
        assert!(is_static_demo_host("rohan-bhaumik.github.io"));
    }

    #[test]
    fn local_hosts_are_not_demo() {
        assert!(!is_static_demo_host("localhost"));
        assert!(!is_static_demo_host("127.0.0.1"));
        assert!(!is_static_demo_host("github.io.example.com"));
    }
}
