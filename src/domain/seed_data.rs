use crate::entities::project::NewProject;

/// Projects inserted by the seed routine into an empty store.
pub fn initial_projects() -> Vec<NewProject> {
    vec![
        NewProject {
            title: "Adaptive AI Tutor".to_string(),
            description: "Design a clean student dashboard for an Adaptive AI Tutor with intelligent learning paths and personalized content recommendations.".to_string(),
            category: "AI".to_string(),
            technologies: to_tags(&["React", "Python", "TensorFlow", "Node.js"]),
            github_url: Some("https://github.com/santhoshkrishna-2004/Adaptive-Tutor".to_string()),
            live_url: None,
            image_url: Some("https://images.unsplash.com/photo-1522202176988-66273c2fd55f?w=400&h=250&fit=crop".to_string()),
            featured: true,
        },
        NewProject {
            title: "Sketch to Image".to_string(),
            description: "Converts hand-drawn sketches into realistic images using deep learning models and advanced computer vision techniques.".to_string(),
            category: "AI".to_string(),
            technologies: to_tags(&["Python", "PyTorch", "OpenCV", "Flask"]),
            github_url: Some("https://github.com/santhoshkrishna-2004/Sketch-To-Image-Web-App".to_string()),
            live_url: None,
            image_url: Some("https://images.unsplash.com/photo-1581291518857-4e27b48ff24e?w=400&h=250&fit=crop".to_string()),
            featured: true,
        },
        NewProject {
            title: "Blood Bank Management System".to_string(),
            description: "Django-based comprehensive application for managing blood donations, requests, donor authentication, and inventory tracking.".to_string(),
            category: "Web".to_string(),
            technologies: to_tags(&["Django", "Python", "PostgreSQL", "Bootstrap"]),
            github_url: Some("https://github.com/santhoshkrishna-2004/RTP-Blood-Bank-Management".to_string()),
            live_url: None,
            image_url: Some("https://images.unsplash.com/photo-1559757148-5c350d0d3c56?w=400&h=250&fit=crop".to_string()),
            featured: false,
        },
    ]
}

fn to_tags(tags: &[&str]) -> Vec<String> {
    tags.iter().map(|t| t.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn seed_projects_pass_validation() {
        let projects = initial_projects();
        assert_eq!(projects.len(), 3);
        assert!(projects.iter().all(|p| p.validate().is_ok()));
    }
}
