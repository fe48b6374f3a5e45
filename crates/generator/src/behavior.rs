use landing_kit_core::PageConfig;

/// Client script shared by every page
///
/// The script is the same for every configuration; the parameter keeps the
/// signature in line with the other renderers.
pub fn render_behavior(_config: &PageConfig) -> String {
    SCRIPT.to_string()
}

const SCRIPT: &str = r#"document.addEventListener('DOMContentLoaded', function () {
  const navLinks = document.querySelectorAll('.nav-link');
  const tabBarLinks = document.querySelectorAll('.mobile-tabbar .nav-link');
  const mainContent = document.querySelector('.main-content');
  const sidebar = document.querySelector('.sidebar');

  function setActiveTab(id) {
    tabBarLinks.forEach(function (link) {
      link.classList.toggle('active', link.dataset.section === id);
    });
  }

  // Active tab: first section on load, then whichever section was scrolled past last
  if (tabBarLinks.length > 0) {
    const firstSection = document.querySelector('section');
    if (firstSection) {
      setActiveTab(firstSection.id);
    }
  }

  window.addEventListener('scroll', function () {
    let current = '';
    document.querySelectorAll('section').forEach(function (section) {
      if (window.pageYOffset >= section.offsetTop - 200) {
        current = section.id;
      }
    });
    if (current) {
      setActiveTab(current);
    }
  });

  // Smooth scrolling for in-page anchors
  navLinks.forEach(function (link) {
    const href = link.getAttribute('href') || '';
    if (!href.startsWith('#')) {
      return;
    }
    link.addEventListener('click', function (event) {
      const target = document.getElementById(href.substring(1));
      if (!target) {
        return;
      }
      event.preventDefault();
      window.scrollTo({ top: target.offsetTop, behavior: 'smooth' });
      setActiveTab(target.id);
      if (sidebar) {
        sidebar.classList.remove('mobile-open');
      }
    });
  });

  // Image hover effects
  document.querySelectorAll('.image-container').forEach(function (image) {
    image.addEventListener('mouseenter', function () {
      image.style.transform = 'scale(1.03)';
      image.style.boxShadow = '0 8px 16px rgba(0, 0, 0, 0.2)';
    });
    image.addEventListener('mouseleave', function () {
      image.style.transform = 'scale(1)';
      image.style.boxShadow = '0 4px 8px rgba(0, 0, 0, 0.1)';
    });
  });

  // Sidebar collapse between the full width and the 60px rail
  document.querySelectorAll('.sidebar-toggle').forEach(function (toggle) {
    toggle.addEventListener('click', function () {
      const owner = toggle.closest('.sidebar');
      if (!owner || !mainContent) {
        return;
      }
      owner.classList.toggle('collapsed');
      const width = owner.classList.contains('collapsed') ? '60px' : '220px';
      if (owner.classList.contains('left-sidebar')) {
        mainContent.style.marginLeft = width;
      } else if (owner.classList.contains('right-sidebar')) {
        mainContent.style.marginRight = width;
      }
    });
  });

  // Off-canvas toggle for small screens
  if (sidebar) {
    const mobileToggle = document.createElement('button');
    mobileToggle.className = 'mobile-sidebar-toggle';
    mobileToggle.setAttribute('aria-label', 'Open navigation');
    mobileToggle.innerHTML = '<span></span><span></span><span></span>';
    document.body.appendChild(mobileToggle);

    mobileToggle.addEventListener('click', function () {
      sidebar.classList.toggle('mobile-open');
    });
  }

  window.addEventListener('resize', function () {
    if (window.innerWidth <= 768) {
      if (sidebar) {
        sidebar.classList.remove('collapsed');
        sidebar.classList.remove('mobile-open');
      }
      if (mainContent) {
        mainContent.style.marginLeft = '0';
        mainContent.style.marginRight = '0';
      }
    } else if (mainContent) {
      mainContent.style.marginLeft = '';
      mainContent.style.marginRight = '';
    }
  });

  // Leave room for the tab bar under the hero on small screens
  function adjustHeroHeight() {
    const hero = document.querySelector('.hero-section');
    if (!hero) {
      return;
    }
    hero.style.minHeight = window.innerWidth <= 768 ? 'calc(100vh - 60px)' : '100vh';
  }

  adjustHeroHeight();
  window.addEventListener('resize', adjustHeroHeight);
});
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_behavior_is_static() {
        let default = render_behavior(&PageConfig::default());
        let other = render_behavior(&PageConfig {
            title: "Other".to_string(),
            single_page: false,
            ..PageConfig::default()
        });
        assert_eq!(default, other);
        assert!(!default.is_empty());
    }

    #[test]
    fn test_behavior_wires_expected_hooks() {
        let script = render_behavior(&PageConfig::default());
        for hook in [
            ".mobile-tabbar .nav-link",
            ".sidebar-toggle",
            "mobile-sidebar-toggle",
            ".image-container",
            ".hero-section",
            "behavior: 'smooth'",
        ] {
            assert!(script.contains(hook), "missing {}", hook);
        }
    }

    #[test]
    fn test_behavior_never_closes_its_script_tag() {
        assert!(!SCRIPT.contains("</script"));
    }
}
